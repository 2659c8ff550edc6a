//! strincify CLI: generate a C string table from a line-delimited text file.
//!
//! ```text
//! strincify <input-file> [<output-module-basename>]
//! ```
//!
//! Writes `<basename>.h` (enum of `STRING_*` ids) and `<basename>.c`
//! (`g_string_table[]` literals), then echoes both blocks to stdout.

mod generate;
mod output;

use clap::Parser;
use std::path::PathBuf;

use strincify_core::DEFAULT_BASENAME;

#[derive(Parser)]
#[command(
    name = "strincify",
    about = "Generate a C string table (enum header + literal array) from a text file",
    version
)]
struct Cli {
    /// Text file with one string per line
    input: PathBuf,

    /// Base name for the generated <basename>.h and <basename>.c
    #[arg(default_value = DEFAULT_BASENAME)]
    basename: String,

    /// Directory the generated files are written into
    #[arg(long, env = "STRINCIFY_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    // Usage errors exit with status 1; --help and --version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            // Nothing is left to report to if stderr is gone; exit either way.
            e.print().ok();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    generate::run(&cli.input, &cli.basename, &cli.out_dir)?;

    Ok(())
}
