//! The batch pass: discover archives, process each in turn, tally results.

use anyhow::{Result, bail};

use crate::archive::{self, ArchiveOutcome, RunTally};
use crate::cli::Cli;
use crate::scan;

/// Run the whole batch over `cli.base_dir`.
///
/// Fails only when the base directory itself is missing; every per-archive
/// failure is logged, counted as skipped, and the loop moves on. After a
/// non-empty scan the summary block is printed to stdout and the final tally
/// is returned.
pub fn run(cli: &Cli) -> Result<RunTally> {
    let base_dir = cli.base_dir.as_path();
    if !base_dir.exists() {
        bail!("base directory does not exist: {}", base_dir.display());
    }

    let archives = scan::find_archives(base_dir);
    if archives.is_empty() {
        log::info!("No .zip files found under: {}", base_dir.display());
        return Ok(RunTally::default());
    }

    let mode = cli.dest_mode();
    let mut tally = RunTally::new(archives.len());

    for zip_path in &archives {
        log::debug!("Processing: {}", zip_path.display());
        let outcome = archive::process_archive(zip_path, mode);
        match &outcome {
            ArchiveOutcome::Extracted { dest, files } => {
                log::info!(
                    "Extracted: {} -> {} ({} files)",
                    zip_path.display(),
                    dest.display(),
                    files
                );
            }
            ArchiveOutcome::Skipped(reason) => {
                log::log!(
                    reason.severity(),
                    "{}: {}. Skipping.",
                    zip_path.display(),
                    reason
                );
            }
        }
        tally.record(&outcome);
    }

    debug_assert_eq!(tally.scanned, tally.extracted + tally.skipped);
    tally.print_summary();
    Ok(tally)
}
