//! # zipsweep
//!
//! Recursively find `.zip` files under a base directory and extract each one
//! in place.
//!
//! Every discovered archive is verified before extraction: each member is
//! streamed through its stored CRC check, and archives with a corrupt member
//! are skipped whole. Per-archive failures never abort a run; they are logged
//! and counted, and a three-line summary is printed at the end.
//!
//! ## Features
//!
//! - Recursive `.zip` discovery at any depth, in stable order
//! - Subfolder mode (extract into a same-named sibling directory) or flat
//!   mode (extract into the archive's parent)
//! - Pre-extraction integrity check of every member
//! - Closed set of skip reasons with severity-matched logging
//!
//! ## Example
//!
//! ```no_run
//! use clap::Parser;
//! use zipsweep::{Cli, batch};
//!
//! fn main() -> anyhow::Result<()> {
//!     let cli = Cli::parse_from(["zipsweep", "/data/submissions"]);
//!     let tally = batch::run(&cli)?;
//!     assert_eq!(tally.scanned, tally.extracted + tally.skipped);
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod batch;
pub mod cli;
pub mod scan;

pub use archive::{ArchiveOutcome, DestMode, RunTally, SkipReason};
pub use cli::Cli;
