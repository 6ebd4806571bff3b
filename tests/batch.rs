//! End-to-end runs of the batch extractor over temp directory trees.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zipsweep::{Cli, batch};

/// Helper: create a minimal valid ZIP.
fn create_test_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let zip_path = dir.join(name);
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
    zip_path
}

/// Helper: flip one byte of a stored member's data so its CRC no longer
/// matches.
fn corrupt_member_data(zip_path: &Path, marker: &[u8]) {
    let mut bytes = fs::read(zip_path).unwrap();
    let pos = bytes
        .windows(marker.len())
        .position(|w| w == marker)
        .unwrap();
    bytes[pos] ^= 0xFF;
    fs::write(zip_path, bytes).unwrap();
}

fn cli_for(base_dir: &Path, no_subfolder: bool) -> Cli {
    Cli {
        base_dir: base_dir.to_path_buf(),
        no_subfolder,
        verbose: false,
    }
}

/// Helper: snapshot every file under `root` as relative path -> contents.
fn tree_snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}

#[test]
fn subfolder_mode_extracts_next_to_each_archive() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("nested")).unwrap();
    create_test_zip(dir.path(), "a.zip", &[("x.txt", b"alpha"), ("y/z.txt", b"beta")]);
    create_test_zip(&dir.path().join("nested"), "b.zip", &[("inner.txt", b"gamma")]);

    let tally = batch::run(&cli_for(dir.path(), false)).unwrap();
    assert_eq!(tally.scanned, 2);
    assert_eq!(tally.extracted, 2);
    assert_eq!(tally.skipped, 0);

    assert_eq!(fs::read(dir.path().join("a/x.txt")).unwrap(), b"alpha");
    assert_eq!(fs::read(dir.path().join("a/y/z.txt")).unwrap(), b"beta");
    assert_eq!(
        fs::read(dir.path().join("nested/b/inner.txt")).unwrap(),
        b"gamma"
    );
}

#[test]
fn flat_mode_extracts_into_each_parent() {
    let dir = TempDir::new().unwrap();
    create_test_zip(dir.path(), "a.zip", &[("x.txt", b"alpha"), ("y/z.txt", b"beta")]);

    let tally = batch::run(&cli_for(dir.path(), true)).unwrap();
    assert_eq!(tally.extracted, 1);

    assert_eq!(fs::read(dir.path().join("x.txt")).unwrap(), b"alpha");
    assert_eq!(fs::read(dir.path().join("y/z.txt")).unwrap(), b"beta");
    // No sibling destination directory is created in flat mode.
    assert!(!dir.path().join("a").exists());
}

#[test]
fn corrupt_archive_is_skipped_while_others_extract() {
    let dir = TempDir::new().unwrap();
    create_test_zip(dir.path(), "good.zip", &[("ok.txt", b"fine")]);
    create_test_zip(dir.path(), "bad.zip", &[("broken.txt", b"damaged payload")]);
    corrupt_member_data(&dir.path().join("bad.zip"), b"damaged payload");

    let tally = batch::run(&cli_for(dir.path(), false)).unwrap();
    assert_eq!(tally.scanned, 2);
    assert_eq!(tally.extracted, 1);
    assert_eq!(tally.skipped, 1);
    assert_eq!(tally.scanned, tally.extracted + tally.skipped);

    assert_eq!(fs::read(dir.path().join("good/ok.txt")).unwrap(), b"fine");
    assert!(!dir.path().join("bad/broken.txt").exists());
}

#[test]
fn malformed_container_counts_as_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("fake.zip"), b"zip in name only").unwrap();

    let tally = batch::run(&cli_for(dir.path(), false)).unwrap();
    assert_eq!(tally.scanned, 1);
    assert_eq!(tally.extracted, 0);
    assert_eq!(tally.skipped, 1);
}

#[test]
fn empty_tree_reports_nothing_and_mutates_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), b"no archives here").unwrap();
    let before = tree_snapshot(dir.path());

    let tally = batch::run(&cli_for(dir.path(), false)).unwrap();
    assert_eq!(tally.scanned, 0);
    assert_eq!(tally.extracted, 0);
    assert_eq!(tally.skipped, 0);
    assert_eq!(tree_snapshot(dir.path()), before);
}

#[test]
fn missing_base_dir_is_fatal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = batch::run(&cli_for(&missing, false)).unwrap_err();
    assert!(err.to_string().contains("base directory does not exist"));
}

#[test]
fn rerun_in_subfolder_mode_is_idempotent() {
    let dir = TempDir::new().unwrap();
    create_test_zip(dir.path(), "a.zip", &[("x.txt", b"alpha"), ("y/z.txt", b"beta")]);

    let first = batch::run(&cli_for(dir.path(), false)).unwrap();
    assert_eq!(first.extracted, 1);
    let after_first = tree_snapshot(dir.path());

    let second = batch::run(&cli_for(dir.path(), false)).unwrap();
    assert_eq!(second.extracted, 1);
    assert_eq!(tree_snapshot(dir.path()), after_first);
}
