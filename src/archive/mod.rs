//! Per-archive processing.
//!
//! One archive moves through a fixed sequence: compute a destination, verify
//! every member's stored CRC, then extract. The result is a closed
//! [`ArchiveOutcome`] that the batch loop pattern-matches to decide logging
//! and counter updates; nothing here aborts a run.
//!
//! The module is organized into three parts:
//!
//! - [`outcome`]: result variants, skip reasons, and the run tally
//! - [`validate`]: the pre-extraction CRC sweep
//! - [`extract`]: destination computation and entry extraction

mod extract;
mod outcome;
mod validate;

pub use extract::{destination_for, process_archive};
pub use outcome::{ArchiveOutcome, DestMode, RunTally, SkipReason};
pub use validate::first_corrupt_entry;
