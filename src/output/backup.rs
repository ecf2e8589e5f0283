// src/output/backup.rs

use crate::constants::BACKUP_SUFFIX;
use crate::errors::{io_error_with_path, Result};
use log::info;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The sibling path a backup of `path` is copied to (`llms.txt` → `llms.txt.bak`).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copies an existing output file to its `.bak` sibling.
///
/// Returns the backup path when a copy was made, or `None` if there was no
/// prior file.
///
/// # Errors
/// Any I/O failure other than the source not existing.
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>> {
    let target = backup_path(path);
    match fs::copy(path, &target) {
        Ok(_) => {
            info!("Backed up {} to {}", path.display(), target.display());
            Ok(Some(target))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound && !path.exists() => Ok(None),
        Err(e) => Err(io_error_with_path(e, path)),
    }
}
