//! Unified error types for strincify.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while generating a string table.
#[derive(Error, Debug)]
pub enum StrincifyError {
    // --- Input ---

    /// The string list could not be opened or read.
    #[error("failed to read string list at {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Output ---

    /// A generated `.h` or `.c` file could not be written.
    #[error("failed to write {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template, missing variables, or
    /// output that does not map back to bytes).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),
}

/// Alias for `Result<T, StrincifyError>`.
pub type Result<T> = std::result::Result<T, StrincifyError>;
