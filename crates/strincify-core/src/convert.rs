//! Converter: input lines to enum body, array body and storage cost.
//!
//! The input is treated as raw bytes with no character-set assumptions. Each
//! line is stripped of surrounding ASCII whitespace and becomes one
//! [`StringEntry`]. The enum body and array body are rendered from the same
//! ordered entry list, so the Nth enum constant always indexes the Nth literal.
//! Raw strings are copied into the literals without escaping.

use std::path::Path;

use crate::error::{Result, StrincifyError};
use crate::sanitize;

/// Indentation in front of every generated enum member and array initializer.
const INDENT: &[u8] = b"    ";

/// One input string after whitespace stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    /// Original bytes, used for the literal and the enum doc comment.
    pub raw: Vec<u8>,
    /// `STRING_<NAME>` constant derived from `raw`.
    pub identifier: Vec<u8>,
}

impl StringEntry {
    /// Build an entry from an unstripped input line.
    pub fn new(line: &[u8]) -> Self {
        let raw = strip(line).to_vec();
        let identifier = sanitize::enum_identifier(&raw);
        Self { raw, identifier }
    }

    /// Enum member line, e.g. `    STRING_OK,  /**< OK */`.
    ///
    /// The whole line is upper-cased, doc comment included.
    pub fn enum_line(&self) -> Vec<u8> {
        let member = [
            &self.identifier[..],
            &b",  /**< "[..],
            &self.raw[..],
            &b" */"[..],
        ]
        .concat();
        [INDENT, &member.to_ascii_uppercase()[..], &b"\n"[..]].concat()
    }

    /// Array initializer line, e.g. `    "OK",`.
    pub fn array_line(&self) -> Vec<u8> {
        [INDENT, &b"\""[..], &self.raw[..], &b"\",\n"[..]].concat()
    }

    /// Bytes the string occupies in the table, null terminator included.
    pub fn storage_bytes(&self) -> usize {
        self.raw.len() + 1
    }
}

/// Output of a single conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResult {
    /// Entries in input order.
    pub entries: Vec<StringEntry>,
    /// Enum member lines, one per entry.
    pub enum_body: Vec<u8>,
    /// Array initializer lines, one per entry.
    pub array_body: Vec<u8>,
    /// Sum of `len(raw) + 1` over all entries.
    pub total_bytes: usize,
}

impl ConversionResult {
    /// Number of entries (and enum members before `STRING_NUM_IDS`).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Convert an ordered sequence of raw lines.
pub fn convert<'a, I>(lines: I) -> ConversionResult
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let entries: Vec<StringEntry> = lines.into_iter().map(StringEntry::new).collect();

    for entry in &entries {
        tracing::debug!(
            "{} <- \"{}\"",
            entry.identifier.escape_ascii(),
            entry.raw.escape_ascii()
        );
    }

    ConversionResult {
        enum_body: entries.iter().flat_map(StringEntry::enum_line).collect(),
        array_body: entries.iter().flat_map(StringEntry::array_line).collect(),
        total_bytes: entries.iter().map(StringEntry::storage_bytes).sum(),
        entries,
    }
}

/// Split file contents into lines on `\n`.
///
/// A trailing newline does not start another line, and empty contents have no
/// lines. `\r` stays on the line and is removed by stripping.
pub fn split_lines(contents: &[u8]) -> Vec<&[u8]> {
    if contents.is_empty() {
        return Vec::new();
    }
    let body = contents.strip_suffix(b"\n").unwrap_or(contents);
    body.split(|&b| b == b'\n').collect()
}

/// Read the whole string list into memory.
///
/// The file handle is released before this returns.
pub fn read_lines(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| StrincifyError::InputRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read and convert a string list file.
pub fn convert_file(path: &Path) -> Result<ConversionResult> {
    let contents = read_lines(path)?;
    let result = convert(split_lines(&contents));
    tracing::info!(
        "converted {} strings from {} ({} bytes)",
        result.len(),
        path.display(),
        result.total_bytes
    );
    Ok(result)
}

/// Whitespace removed from both ends of a line. Includes `\x0b`, which
/// [`u8::is_ascii_whitespace`] does not.
fn is_strip_byte(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn strip(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !is_strip_byte(b))
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !is_strip_byte(b))
        .map_or(start, |i| i + 1);
    &line[start..end]
}
