//! Defines core data structures used throughout the application pipeline.

use std::path::{Path, PathBuf};

/// A documentation file selected by the directory walk.
///
/// `absolute_path` is unique within one traversal; `relative_path` is the same
/// path with the traversal root stripped off. Values are created by the walker
/// and treated as read-only afterwards.
///
/// # Examples
///
/// ```
/// use llmstxt::core_types::MatchedFile;
/// use std::path::PathBuf;
///
/// let file = MatchedFile {
///     absolute_path: PathBuf::from("/repo/docs/guide.md"),
///     relative_path: PathBuf::from("docs/guide.md"),
///     size: 20,
/// };
/// assert_eq!(file.file_name(), "guide.md");
/// assert_eq!(file.display_path(), "docs/guide.md");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedFile {
    /// The absolute path to the file on the filesystem.
    pub absolute_path: PathBuf,
    /// The path relative to the traversal root.
    pub relative_path: PathBuf,
    /// The size of the file in bytes, taken from metadata during the walk.
    pub size: u64,
}

impl MatchedFile {
    /// The base name of the file, used as the link text in the index.
    pub fn file_name(&self) -> String {
        self.relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.display_path())
    }

    /// The relative path with `/` separators, regardless of platform.
    pub fn display_path(&self) -> String {
        display_path(&self.relative_path)
    }

    /// The relative path of the containing directory; `""` for files at the root.
    pub fn parent_dir(&self) -> String {
        self.relative_path
            .parent()
            .map(display_path)
            .unwrap_or_default()
    }
}

/// Formats a path for display with consistent `/` separators, even on Windows.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Aggregate statistics reported by analyze mode.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DocStats {
    /// Number of matched files.
    pub file_count: usize,
    /// Number of distinct parent folders among the matched files.
    pub folder_count: usize,
    /// Total whitespace-delimited words across all matched files.
    pub total_words: usize,
    /// Total size of all matched files in bytes.
    pub total_bytes: u64,
}

impl DocStats {
    /// Average file size in bytes; `0.0` when no files matched.
    ///
    /// ```
    /// use llmstxt::core_types::DocStats;
    ///
    /// let stats = DocStats { file_count: 2, folder_count: 1, total_words: 30, total_bytes: 150 };
    /// assert_eq!(stats.average_size(), 75.0);
    /// assert_eq!(DocStats::default().average_size(), 0.0);
    /// ```
    pub fn average_size(&self) -> f64 {
        if self.file_count == 0 {
            0.0
        } else {
            self.total_bytes as f64 / self.file_count as f64
        }
    }
}
