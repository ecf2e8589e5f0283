// src/output/mod.rs
//! Produces the link index and full-content outputs, plus the textual reports
//! of the preview, summary and analyze modes.

use crate::config::OutputConfig;
use crate::core_types::MatchedFile;
use crate::errors::Result;
use log::debug;
use std::io::Write;

pub mod analyze;
pub mod backup;
pub mod full_content;
pub mod link_index;
pub mod preview;
pub mod summary;
pub mod writer;

use writer::{write_documents, Render};

/// Writes both outputs for the final file list.
///
/// `contents` must be index-aligned with `files`. When backups are enabled,
/// existing outputs are copied to `.bak` siblings before anything is
/// replaced. The title heading is written only if `output.include_title` is
/// set.
pub fn write_outputs(
    files: &[MatchedFile],
    contents: &[Vec<u8>],
    title: &str,
    output: &OutputConfig,
) -> Result<()> {
    debug!(
        "Writing {} files to {} and {}",
        files.len(),
        output.link_index_path.display(),
        output.full_content_path.display()
    );

    if output.backup_existing {
        backup::backup_existing(&output.link_index_path)?;
        backup::backup_existing(&output.full_content_path)?;
    }

    let title = output.include_title.then_some(title);
    let documents = vec![
        (
            output.link_index_path.as_path(),
            Box::new(move |w: &mut dyn Write| link_index::write_link_index(w, files, title))
                as Render<'_>,
        ),
        (
            output.full_content_path.as_path(),
            Box::new(move |w: &mut dyn Write| full_content::write_full_content(w, contents))
                as Render<'_>,
        ),
    ];
    write_documents(&output.output_dir, documents)
}
