use std::path::PathBuf;

use clap::Parser;

use crate::archive::DestMode;

#[derive(Parser, Debug)]
#[command(name = "zipsweep")]
#[command(version)]
#[command(about = "Recursively find and extract .zip files", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipsweep                       extract every zip under the current directory\n  \
  zipsweep ~/submissions         extract each zip into a same-named sibling folder\n  \
  zipsweep --no-subfolder dir    extract each zip directly into its parent directory")]
pub struct Cli {
    /// Base directory to search for .zip files
    #[arg(value_name = "BASE_DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Extract directly into each zip's parent directory instead of a subfolder
    #[arg(long)]
    pub no_subfolder: bool,

    /// Show more logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Destination mode selected by the `--no-subfolder` flag.
    pub fn dest_mode(&self) -> DestMode {
        if self.no_subfolder {
            DestMode::Flat
        } else {
            DestMode::Subfolder
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
