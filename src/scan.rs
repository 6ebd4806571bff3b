//! Recursive discovery of `.zip` files under a base directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collect every `.zip` file under `root`, at any depth.
///
/// Entries are sorted by file name so the processing order (and therefore the
/// log output) is reproducible across runs over the same tree. Unreadable
/// directory entries are silently dropped from the walk; the archives that
/// remain are still processed.
pub fn find_archives(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == "zip")
        })
        .map(|entry| entry.into_path())
        .collect()
}
