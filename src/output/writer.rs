// src/output/writer.rs

use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Renders a document into a writer.
pub type Render<'a> = Box<dyn FnOnce(&mut dyn Write) -> std::io::Result<()> + 'a>;

/// Writes each `(path, render)` document to a temporary file in `output_dir`
/// and only replaces the final paths once every document rendered cleanly.
///
/// The output directory is created if missing. Temporary files that are never
/// persisted are removed when dropped.
pub fn write_documents(output_dir: &Path, documents: Vec<(&Path, Render<'_>)>) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|e| io_error_with_path(e, output_dir))?;

    let mut staged = Vec::with_capacity(documents.len());
    for (path, render) in documents {
        let tmp = NamedTempFile::new_in(output_dir).map_err(|e| io_error_with_path(e, output_dir))?;
        let mut buffered = BufWriter::new(tmp);
        render(&mut buffered).map_err(|e| io_error_with_path(e, path))?;
        let tmp = buffered
            .into_inner()
            .map_err(|e| io_error_with_path(e.into_error(), path))?;
        staged.push((path, tmp));
    }

    for (path, tmp) in staged {
        tmp.persist(path)
            .map_err(|e| io_error_with_path(e.error, path))?;
        debug!("Wrote {}", path.display());
    }
    Ok(())
}
