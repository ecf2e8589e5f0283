// src/filtering/extension.rs

use crate::config::TraversalConfig;
use crate::constants::DOC_EXTENSIONS;
use std::path::Path;

/// Checks if a file name ends with one of the recognized documentation
/// extensions (case-insensitive).
#[inline]
pub fn has_doc_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    DOC_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Checks if a file name ends with any of the configured excluded extensions
/// (case-insensitive). Excluded extensions are stored without a leading dot,
/// so compound suffixes such as `draft.md` also work.
#[inline]
pub fn has_excluded_extension(file_name: &str, config: &TraversalConfig) -> bool {
    if config.exclude_extensions.is_empty() {
        return false;
    }
    let lower = file_name.to_lowercase();
    config
        .exclude_extensions
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

/// Checks if a path passes the extension rules of the walk.
///
/// The file must end with a recognized documentation extension, and must not
/// end with an excluded extension. Exclusion wins when both match.
///
/// # Examples
///
/// ```
/// use llmstxt::config::TraversalConfig;
/// use llmstxt::filtering::passes_extension_filters;
/// use std::path::Path;
///
/// let mut config = TraversalConfig::default();
/// assert!(passes_extension_filters(Path::new("docs/guide.md"), &config));
/// assert!(passes_extension_filters(Path::new("NOTES.TXT"), &config));
/// assert!(!passes_extension_filters(Path::new("img/diagram.png"), &config));
/// assert!(!passes_extension_filters(Path::new("Makefile"), &config));
///
/// config.exclude_extensions.insert("txt".to_string());
/// assert!(!passes_extension_filters(Path::new("NOTES.TXT"), &config));
/// ```
pub fn passes_extension_filters(path: &Path, config: &TraversalConfig) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    has_doc_extension(&name) && !has_excluded_extension(&name, config)
}
