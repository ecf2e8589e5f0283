use crate::config::TraversalConfig;
use crate::filtering::is_skipped_dir;
use log::debug;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Configures the `walkdir` iterator for a traversal.
///
/// No sorting is applied, so entries come in directory-listing order. Skipped
/// directories are pruned through `filter_entry`, which stops `walkdir` from
/// descending into them at all. The root (depth 0) is never pruned, even when
/// its own name looks hidden (temporary clone directories often do).
pub(super) fn build_walker<'a>(
    root: &Path,
    config: &'a TraversalConfig,
) -> impl Iterator<Item = walkdir::Result<DirEntry>> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(move |entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if is_skipped_dir(&name, config) {
                debug!("Skipping directory subtree: {}", entry.path().display());
                return false;
            }
            true
        })
}
