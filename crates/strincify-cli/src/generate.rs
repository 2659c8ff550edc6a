use std::path::Path;

use anyhow::{Context, Result};

use strincify_core::convert;
use strincify_core::emit::Emitter;

use crate::output;

/// Convert the string list and write the `.h` / `.c` pair.
///
/// The input is read and closed before any output is rendered, so a bad input
/// leaves the output directory untouched. The header is written before the
/// source; if the source write fails the header stays on disk.
pub fn run(input: &Path, basename: &str, out_dir: &Path) -> Result<()> {
    let result = convert::convert_file(input)?;
    println!("Strings use {} bytes", result.total_bytes);

    let table = Emitter::new()
        .render(basename, &result)
        .context("rendering string table templates")?;

    let header_path = table.header.write_to(out_dir)?;
    let source_path = table.source.write_to(out_dir)?;

    output::print_block(&table.enum_block)?;
    output::print_block(&table.array_block)?;

    for path in [header_path, source_path] {
        output::print_success(&format!("wrote {}", path.display()));
    }

    Ok(())
}
