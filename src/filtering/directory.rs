// src/filtering/directory.rs

use crate::config::TraversalConfig;
use crate::constants::BUILTIN_IGNORED_DIRS;

/// Checks whether a directory's whole subtree should be skipped.
///
/// A directory is skipped when its name is in the configured skip set, is
/// hidden (starts with `.`), or is one of the built-in version-control and
/// dependency/build directories.
///
/// # Examples
///
/// ```
/// use llmstxt::config::TraversalConfig;
/// use llmstxt::filtering::is_skipped_dir;
///
/// let mut config = TraversalConfig::default();
/// config.skip_dirs.insert("drafts".to_string());
///
/// assert!(is_skipped_dir("drafts", &config));
/// assert!(is_skipped_dir(".github", &config));
/// assert!(is_skipped_dir("node_modules", &config));
/// assert!(!is_skipped_dir("docs", &config));
/// ```
#[inline]
pub fn is_skipped_dir(name: &str, config: &TraversalConfig) -> bool {
    name.starts_with('.')
        || config.skip_dirs.contains(name)
        || BUILTIN_IGNORED_DIRS.contains(&name)
}
