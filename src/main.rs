//! Main entry point for the zipsweep CLI application.
//!
//! Parses command-line arguments, installs the logger, and runs the batch
//! extractor over the requested base directory. Only a missing base directory
//! produces a non-zero exit; per-archive failures are reported in the logs
//! and the final summary instead.

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use zipsweep::{Cli, batch};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    batch::run(&cli)?;

    Ok(())
}

/// Install the process-wide logger.
///
/// Verbosity comes from the CLI alone; `RUST_LOG` is deliberately ignored.
fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}
