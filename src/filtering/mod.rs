// src/filtering/mod.rs

//! Provides standalone predicates for the directory walk.
//!
//! These decide which directories are descended into and which files are
//! collected. They are public so other tools (and the GitHub API downloader)
//! can apply exactly the same rules.

mod directory;
mod extension;
mod size;

pub use directory::is_skipped_dir;
pub use extension::{has_doc_extension, has_excluded_extension, passes_extension_filters};
pub use size::passes_size_filter;
