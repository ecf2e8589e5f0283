// src/discovery/entry_processor.rs

use crate::config::TraversalConfig;
use crate::core_types::MatchedFile;
use crate::errors::{io_error_with_path, Result};
use crate::filtering::{passes_extension_filters, passes_size_filter};
use log::{debug, trace, warn};
use std::io;
use std::path::Path;
use walkdir::DirEntry;

/// Processes a single directory entry from the walk.
///
/// Returns `Ok(Some(MatchedFile))` if the entry is a regular file that passes
/// the extension and size filters, `Ok(None)` if it is filtered out or is not
/// a regular file. A walk error on the root is fatal; below the root it is
/// logged and the entry skipped.
pub(super) fn process_direntry(
    entry_result: walkdir::Result<DirEntry>,
    root: &Path,
    config: &TraversalConfig,
) -> Result<Option<MatchedFile>> {
    // --- 1. Handle Walker Errors ---
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(walk_error) => {
            if walk_error.depth() == 0 {
                let path = walk_error
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                let source = walk_error
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("unreadable traversal root"));
                return Err(io_error_with_path(source, path));
            }
            warn!("Walker error: {}", walk_error);
            return Ok(None);
        }
    };

    // --- 2. Filter by File Type ---
    // Symlinks report their own type because links are not followed.
    if !entry.file_type().is_file() {
        trace!("Skipping non-file entry: {}", entry.path().display());
        return Ok(None);
    }

    // --- 3. Filter by Extension ---
    let absolute_path = entry.path().to_path_buf();
    if !passes_extension_filters(&absolute_path, config) {
        trace!(
            "Skipping file due to extension filter: {}",
            absolute_path.display()
        );
        return Ok(None);
    }

    // --- 4. Filter by Size ---
    let size = match entry.metadata() {
        Ok(md) => md.len(),
        Err(e) => {
            warn!(
                "Skipping entry '{}' due to metadata error: {}",
                absolute_path.display(),
                e
            );
            return Ok(None);
        }
    };
    if !passes_size_filter(size, config) {
        debug!(
            "Skipping file due to size constraint: {} (Size: {} bytes)",
            absolute_path.display(),
            size
        );
        return Ok(None);
    }

    // --- 5. Relative Path ---
    let relative_path = match absolute_path.strip_prefix(root) {
        Ok(rel) => rel.to_path_buf(),
        Err(err) => {
            warn!(
                "Failed to strip prefix '{}' from '{}': {}. Skipping.",
                root.display(),
                absolute_path.display(),
                err
            );
            return Ok(None);
        }
    };

    debug!("Matched: {}", relative_path.display());
    Ok(Some(MatchedFile {
        absolute_path,
        relative_path,
        size,
    }))
}
