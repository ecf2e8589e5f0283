//! Defines application-specific error types.
//!
//! Every failure in the pipeline is terminal for the current run. The variants
//! here categorize them so the binary can report a readable message and pick
//! the exit code.

use thiserror::Error;

/// Errors produced by `llmstxt`.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad or missing source, malformed URL, or an invalid option value or combination.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The external `git` client exited non-zero (or could not be launched).
    #[error("Failed to clone '{url}': {stderr}")]
    CloneFailed {
        /// The clone URL that was attempted.
        url: String,
        /// Captured stderr of the `git` process.
        stderr: String,
    },

    /// Error occurring during file or directory access (stat, read, write, copy, remove).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A remote API or raw-content request failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,

    /// No files were left to write after filtering and confirmation.
    #[error("No documentation files found matching the specified criteria.")]
    NoFilesFound,
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Examples
///
/// ```
/// use llmstxt::errors::{io_error_with_path, Error};
/// use std::io;
///
/// let err = io_error_with_path(io::Error::from(io::ErrorKind::NotFound), "docs/guide.md");
/// assert!(matches!(err, Error::Io { .. }));
/// assert!(err.to_string().contains("docs/guide.md"));
/// ```
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.md");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = io_error_with_path(source_error, &path);

        match app_error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.md"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
                assert!(source.to_string().contains("File not found"));
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_clone_failed_message_includes_stderr() {
        let err = Error::CloneFailed {
            url: "https://github.com/owner/repo.git".to_string(),
            stderr: "fatal: repository not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://github.com/owner/repo.git"));
        assert!(msg.contains("fatal: repository not found"));
    }
}
