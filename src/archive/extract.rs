use std::fs;
use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};

use zip::ZipArchive;
use zip::result::ZipError;

use super::outcome::{ArchiveOutcome, DestMode, SkipReason};
use super::validate;

/// Compute where an archive's contents should land.
///
/// Subfolder mode strips the `.zip` extension to name a sibling directory;
/// flat mode reuses the archive's parent directory as-is.
pub fn destination_for(zip_path: &Path, mode: DestMode) -> PathBuf {
    match mode {
        DestMode::Subfolder => zip_path.with_extension(""),
        DestMode::Flat => zip_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

/// Run one archive through the full pipeline: ensure the destination exists,
/// verify every member's CRC, then extract. Every failure mode is folded into
/// [`ArchiveOutcome::Skipped`]; this function never aborts the caller's batch.
pub fn process_archive(zip_path: &Path, mode: DestMode) -> ArchiveOutcome {
    let dest = destination_for(zip_path, mode);

    if let Err(err) = fs::create_dir_all(&dest) {
        return ArchiveOutcome::Skipped(classify_io_error(err));
    }

    match extract_validated(zip_path, &dest) {
        Ok(files) => ArchiveOutcome::Extracted { dest, files },
        Err(reason) => ArchiveOutcome::Skipped(reason),
    }
}

/// Open, validate, and extract a single archive.
///
/// The file handle lives only for this call and is released on every path.
fn extract_validated(zip_path: &Path, dest: &Path) -> Result<usize, SkipReason> {
    let file = fs::File::open(zip_path).map_err(classify_io_error)?;
    let mut archive = ZipArchive::new(file).map_err(classify_zip_error)?;

    if let Some(entry) = validate::first_corrupt_entry(&mut archive).map_err(classify_zip_error)? {
        return Err(SkipReason::CorruptEntry { entry });
    }

    extract_entries(&mut archive, dest)
}

/// Write every member of `archive` under `dest`, overwriting existing files.
///
/// Returns the number of files written. Members whose names would escape the
/// destination are skipped individually.
fn extract_entries<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    dest: &Path,
) -> Result<usize, SkipReason> {
    let mut files = 0;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(classify_zip_error)?;

        let Some(relative) = entry.enclosed_name() else {
            log::debug!("Skipping entry with unsafe path: {}", entry.name());
            continue;
        };
        let output = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&output).map_err(classify_io_error)?;
        } else {
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent).map_err(classify_io_error)?;
            }
            let mut outfile = fs::File::create(&output).map_err(classify_io_error)?;
            io::copy(&mut entry, &mut outfile).map_err(classify_io_error)?;
            files += 1;
        }
    }
    Ok(files)
}

fn classify_zip_error(err: ZipError) -> SkipReason {
    match err {
        ZipError::Io(io_err) => classify_io_error(io_err),
        err @ ZipError::InvalidArchive(_) => SkipReason::MalformedArchive(err.to_string()),
        err @ (ZipError::UnsupportedArchive(_) | ZipError::InvalidPassword) => {
            SkipReason::RuntimeExtraction(err.to_string())
        }
        other => SkipReason::Unexpected(other.into()),
    }
}

fn classify_io_error(err: io::Error) -> SkipReason {
    if err.kind() == io::ErrorKind::PermissionDenied {
        SkipReason::PermissionDenied(err)
    } else {
        SkipReason::Unexpected(err.into())
    }
}
