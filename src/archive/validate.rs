use std::io::{self, Read, Seek};

use zip::ZipArchive;
use zip::result::ZipError;

/// Find the first member whose content fails its stored integrity check.
///
/// Streams every entry into a sink so the zip reader verifies each stored CRC
/// against the decompressed bytes, without writing any output. Returns
/// `Ok(None)` when every member checks out, `Ok(Some(name))` naming the first
/// bad member, or the underlying [`ZipError`] when the archive structure
/// itself cannot be read.
pub fn first_corrupt_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
) -> Result<Option<String>, ZipError> {
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();
        if io::copy(&mut entry, &mut io::sink()).is_err() {
            return Ok(Some(name));
        }
    }
    Ok(None)
}
