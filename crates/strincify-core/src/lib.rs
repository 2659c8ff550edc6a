//! Core library for the strincify string-table generator.
//!
//! Turns a line-delimited list of UI strings into two C artifacts: a header
//! declaring `enum _string_table_ids` and a source file defining the matching
//! `g_string_table[]` literal array. The Nth enum constant indexes the Nth
//! array element.
//!
//! The work is split into three steps:
//! - [`sanitize`] derives a `STRING_<NAME>` identifier from each raw string
//! - [`convert`] folds the input lines into the enum body, array body and byte count
//! - [`emit`] wraps those bodies in the embedded [`templates`] and writes `<name>.h` / `<name>.c`

pub mod convert;
pub mod emit;
pub mod error;
pub mod sanitize;
pub mod templates;

/// Module basename used when the caller does not supply one.
pub const DEFAULT_BASENAME: &str = "string_table";
