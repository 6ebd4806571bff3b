use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Where an archive's contents land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestMode {
    /// A sibling directory named after the archive (minus `.zip`).
    Subfolder,
    /// The archive's own parent directory.
    Flat,
}

/// Reasons an archive is skipped instead of extracted.
///
/// Every per-archive failure is folded into one of these variants; none of
/// them aborts the batch.
#[derive(Debug, Error)]
pub enum SkipReason {
    /// A member's stored CRC does not match its content.
    #[error("corrupted member '{entry}'")]
    CorruptEntry { entry: String },

    /// The container itself is not a valid zip file.
    #[error("bad or corrupted zip file: {0}")]
    MalformedArchive(String),

    /// Failure surfaced only while extracting, e.g. unsupported encryption.
    #[error("runtime error: {0}")]
    RuntimeExtraction(String),

    /// Filesystem refused a create or write.
    #[error("permission denied: {0}")]
    PermissionDenied(#[source] io::Error),

    /// Anything else.
    #[error("unexpected error: {0}")]
    Unexpected(anyhow::Error),
}

impl SkipReason {
    /// Severity for the batch loop's log line.
    pub fn severity(&self) -> log::Level {
        match self {
            SkipReason::CorruptEntry { .. }
            | SkipReason::MalformedArchive(_)
            | SkipReason::RuntimeExtraction(_) => log::Level::Warn,
            SkipReason::PermissionDenied(_) | SkipReason::Unexpected(_) => log::Level::Error,
        }
    }
}

/// Result of processing one archive.
#[derive(Debug)]
pub enum ArchiveOutcome {
    Extracted { dest: PathBuf, files: usize },
    Skipped(SkipReason),
}

/// Counters for a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunTally {
    pub scanned: usize,
    pub extracted: usize,
    pub skipped: usize,
}

impl RunTally {
    pub fn new(scanned: usize) -> Self {
        Self {
            scanned,
            extracted: 0,
            skipped: 0,
        }
    }

    pub fn record(&mut self, outcome: &ArchiveOutcome) {
        match outcome {
            ArchiveOutcome::Extracted { .. } => self.extracted += 1,
            ArchiveOutcome::Skipped(_) => self.skipped += 1,
        }
    }

    /// Print the end-of-run summary block to stdout.
    pub fn print_summary(&self) {
        println!();
        println!("Scanned {} .zip files.", self.scanned);
        println!("Successfully extracted: {}", self.extracted);
        println!("Skipped / failed: {}", self.skipped);
    }
}
