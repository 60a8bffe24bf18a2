//! Whole-file reads and replace-on-write saves.

use crate::error::{StorageError, StorageResult};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read the whole file at `path`.
pub fn read_all(path: &Path) -> StorageResult<Vec<u8>> {
    let mut file = File::open(path).map_err(io_error(path))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(io_error(path))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read address book file");
    Ok(bytes)
}

/// Replace the file at `path` with `bytes`.
///
/// The data goes to a sibling temporary file that is renamed over `path`
/// once fully written, so a failed save leaves any previous file intact.
pub fn write_replace(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    let tmp_path = temp_sibling(path);

    let result = write_synced(&tmp_path, bytes)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(io_error(path)));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    } else {
        debug!(path = %path.display(), bytes = bytes.len(), "Wrote address book file");
    }
    result
}

fn write_synced(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    let mut file = File::create(path).map_err(io_error(path))?;
    file.write_all(bytes).map_err(io_error(path))?;
    file.sync_all().map_err(io_error(path))
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("address_book"));
    name.push(".tmp");
    path.with_file_name(name)
}
