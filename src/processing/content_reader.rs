// src/processing/content_reader.rs

use crate::errors::{io_error_with_path, Result};
use std::{fs, path::Path};

/// Reads the raw bytes of a file. Content is never decoded or altered.
pub(super) fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| io_error_with_path(e, path))
}
