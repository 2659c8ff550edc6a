//! Template emitter: wraps converter output in the C file templates.
//!
//! The enum and array bodies are first placed into their skeletons
//! (`enum _string_table_ids { ... STRING_NUM_IDS };` and
//! `const char* g_string_table[] = { ... };`), then each skeleton is placed
//! into the license-carrying header or source template.
//!
//! Bodies are raw bytes end to end; see [`crate::templates::renderer`] for how
//! they pass through Handlebars unchanged.
//!
//! Writing a file overwrites whatever is already there. The header and source
//! are written independently; a failure on the second leaves the first in place.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::convert::ConversionResult;
use crate::error::{Result, StrincifyError};
use crate::templates::embedded;
use crate::templates::renderer::{bytes_to_text, TemplateRenderer};

/// Which half of the string table a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Header,
    Source,
}

impl FileKind {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Header => "h",
            Self::Source => "c",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Self::Header => embedded::HEADER,
            Self::Source => embedded::SOURCE,
        }
    }

    /// Template variable the block is substituted into.
    fn block_key(&self) -> &'static str {
        match self {
            Self::Header => "enum_block",
            Self::Source => "array_block",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Source => write!(f, "source"),
        }
    }
}

/// A fully rendered output file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    /// `<module>.h` or `<module>.c`.
    pub filename: String,
    pub kind: FileKind,
    pub body: Vec<u8>,
}

impl EmittedFile {
    /// Write the file into `dir`, replacing any existing file of the same name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.body).map_err(|e| StrincifyError::OutputWrite {
            path: path.clone(),
            source: e,
        })?;
        tracing::info!("wrote {} {}", self.kind, path.display());
        Ok(path)
    }
}

/// Everything produced from one [`ConversionResult`].
#[derive(Debug, Clone)]
pub struct RenderedTable {
    /// The enum skeleton with the body filled in, as echoed to the user.
    pub enum_block: Vec<u8>,
    /// The array skeleton with the body and byte count filled in.
    pub array_block: Vec<u8>,
    pub header: EmittedFile,
    pub source: EmittedFile,
}

/// Renders the string table templates.
#[derive(Default)]
pub struct Emitter {
    renderer: TemplateRenderer,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            renderer: TemplateRenderer::new(),
        }
    }

    /// Wrap the enum body in `enum _string_table_ids { ... STRING_NUM_IDS };`.
    pub fn render_enum_block(&self, enum_body: &[u8]) -> Result<Vec<u8>> {
        self.renderer.render_bytes(
            embedded::ENUM_BLOCK,
            &json!({ "enum_body": bytes_to_text(enum_body) }),
        )
    }

    /// Wrap the array body in `const char* g_string_table[] = { ... };` with the byte count comment.
    pub fn render_array_block(&self, array_body: &[u8], total_bytes: usize) -> Result<Vec<u8>> {
        self.renderer.render_bytes(
            embedded::ARRAY_BLOCK,
            &json!({ "array_body": bytes_to_text(array_body), "total_bytes": total_bytes }),
        )
    }

    /// Render `<module_name>.h` around an already rendered enum block.
    pub fn render_header(&self, module_name: &str, enum_block: &[u8]) -> Result<EmittedFile> {
        self.render_file(FileKind::Header, module_name, enum_block)
    }

    /// Render `<module_name>.c` around an already rendered array block.
    pub fn render_source(&self, module_name: &str, array_block: &[u8]) -> Result<EmittedFile> {
        self.render_file(FileKind::Source, module_name, array_block)
    }

    /// Render both blocks and both files for a conversion result.
    pub fn render(&self, module_name: &str, result: &ConversionResult) -> Result<RenderedTable> {
        let enum_block = self.render_enum_block(&result.enum_body)?;
        let array_block = self.render_array_block(&result.array_body, result.total_bytes)?;
        let header = self.render_header(module_name, &enum_block)?;
        let source = self.render_source(module_name, &array_block)?;

        Ok(RenderedTable {
            enum_block,
            array_block,
            header,
            source,
        })
    }

    fn render_file(&self, kind: FileKind, module_name: &str, block: &[u8]) -> Result<EmittedFile> {
        let mut data = json!({ "file_name": bytes_to_text(module_name.as_bytes()) });
        data[kind.block_key()] = json!(bytes_to_text(block));

        Ok(EmittedFile {
            filename: format!("{module_name}.{}", kind.extension()),
            kind,
            body: self.renderer.render_bytes(kind.template(), &data)?,
        })
    }
}
