//! Handles the content stage of the pipeline.
//!
//! This module reads the bytes of matched files in parallel using Rayon and
//! computes the word and folder statistics used by analyze mode.

use crate::cancellation::CancellationToken;
use crate::core_types::{DocStats, MatchedFile};
use crate::errors::{Error, Result};
use crate::progress::ProgressReporter;
use log::debug;
use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

mod content_reader;
mod counter;

pub use counter::count_words;

use content_reader::read_file_bytes;

/// Reads the content of every matched file, in parallel.
///
/// The returned vector is index-aligned with `files`: `contents[i]` holds the
/// bytes of `files[i]`, whatever order the reads actually finish in.
///
/// # Errors
/// Returns `Error::Io` for the first file that cannot be read, and
/// `Error::Interrupted` if the token is cancelled while reading.
pub fn read_contents(
    files: &[MatchedFile],
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
) -> Result<Vec<Vec<u8>>> {
    progress.set_length(files.len() as u64);
    progress.set_message("Reading files".to_string());
    let done = AtomicU64::new(0);

    let contents = files
        .par_iter()
        .map(|file| {
            if token.is_cancelled() {
                return Err(Error::Interrupted);
            }
            debug!("Reading file: {}", file.absolute_path.display());
            let bytes = read_file_bytes(&file.absolute_path)?;
            let pos = done.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(pos);
            Ok(bytes)
        })
        .collect::<Result<Vec<_>>>()?;

    progress.finish_with_message(format!("Read {} files", contents.len()));
    Ok(contents)
}

/// Computes aggregate statistics over the matched files and their contents.
///
/// `contents` must be index-aligned with `files`, as returned by
/// [`read_contents`]. Folders are counted by distinct parent directory of the
/// matched files; files at the root count as one folder.
///
/// # Examples
///
/// ```
/// use llmstxt::core_types::MatchedFile;
/// use llmstxt::processing::compute_stats;
/// use std::path::PathBuf;
///
/// let files = vec![
///     MatchedFile { relative_path: PathBuf::from("docs/a.md"), size: 11, ..Default::default() },
///     MatchedFile { relative_path: PathBuf::from("docs/b.md"), size: 5, ..Default::default() },
/// ];
/// let contents = vec![b"hello world".to_vec(), b"three".to_vec()];
/// let stats = compute_stats(&files, &contents);
/// assert_eq!(stats.file_count, 2);
/// assert_eq!(stats.folder_count, 1);
/// assert_eq!(stats.total_words, 3);
/// assert_eq!(stats.total_bytes, 16);
/// ```
pub fn compute_stats(files: &[MatchedFile], contents: &[Vec<u8>]) -> DocStats {
    let folders: HashSet<String> = files.iter().map(MatchedFile::parent_dir).collect();
    DocStats {
        file_count: files.len(),
        folder_count: folders.len(),
        total_words: contents.iter().map(|bytes| count_words(bytes)).sum(),
        total_bytes: contents.iter().map(|bytes| bytes.len() as u64).sum(),
    }
}
