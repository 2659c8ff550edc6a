//! Terminal output formatting for the strincify CLI.
//!
//! Provides consistent, colored output using the [`console`] crate.

use std::io::{self, Write};

use console::style;

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a generated block verbatim, followed by a newline.
///
/// Blocks are raw bytes and need not be valid UTF-8.
pub fn print_block(block: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(block)?;
    stdout.write_all(b"\n")?;
    stdout.flush()
}
