//! Discovers documentation files under a root directory.
use crate::cancellation::CancellationToken;
use crate::config::TraversalConfig;
use crate::core_types::MatchedFile;
use crate::errors::{Error, Result};
use log::debug;
use std::path::Path;
use tracing::instrument;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Walks `root` depth-first and returns every matching documentation file.
///
/// Directories are visited in the order the filesystem lists them (no
/// sorting), so the result order is the traversal order and is reproduced
/// exactly as long as the listing order is stable. Hidden, built-in ignored
/// and user-skipped directories are pruned with their whole subtree. Files
/// must carry a documentation extension, must not carry an excluded extension,
/// and must fit the size limit. Symbolic links are never followed or matched.
///
/// # Errors
/// Returns `Error::Io` if the root itself cannot be read, and
/// `Error::Interrupted` if the token is cancelled during the walk. Unreadable
/// entries below the root are logged and skipped.
///
/// # Examples
///
/// ```
/// use llmstxt::config::TraversalConfig;
/// use llmstxt::{discover_files, CancellationToken};
/// use std::fs;
///
/// let dir = tempfile::tempdir().unwrap();
/// fs::create_dir_all(dir.path().join("docs/img")).unwrap();
/// fs::write(dir.path().join("docs/guide.md"), "# Guide").unwrap();
/// fs::write(dir.path().join("docs/img/diagram.png"), [0u8; 4]).unwrap();
///
/// let files = discover_files(dir.path(), &TraversalConfig::default(), &CancellationToken::new()).unwrap();
/// assert_eq!(files.len(), 1);
/// assert_eq!(files[0].display_path(), "docs/guide.md");
/// ```
#[instrument(level = "debug", skip(config, token), fields(root = %root.display()))]
pub fn discover_files(
    root: &Path,
    config: &TraversalConfig,
    token: &CancellationToken,
) -> Result<Vec<MatchedFile>> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    let mut files = Vec::new();
    for entry_result in build_walker(root, config) {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        if let Some(matched) = process_direntry(entry_result, root, config)? {
            files.push(matched);
        }
    }

    debug!("Discovery complete. Matched files: {}", files.len());
    Ok(files)
}
