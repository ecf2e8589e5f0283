// src/output/preview.rs

use crate::constants::SECTION_SEPARATOR;
use crate::core_types::MatchedFile;
use indexmap::IndexMap;
use log::debug;
use std::io::{self, Write};

/// Writes the preview listing: matched files grouped by their containing
/// directory, directories in order of first appearance.
///
/// Files at the walk root are listed under `./`.
///
/// # Examples
///
/// ```
/// use llmstxt::core_types::MatchedFile;
/// use llmstxt::output::preview::write_preview;
/// use std::path::PathBuf;
///
/// let files: Vec<MatchedFile> = ["docs/b.md", "a.md", "docs/c.md"]
///     .iter()
///     .map(|p| MatchedFile { relative_path: PathBuf::from(p), ..Default::default() })
///     .collect();
/// let mut out = Vec::new();
/// write_preview(&mut out, &files).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "--- Preview: 3 files would be processed ---\n\
///      docs/\n  b.md\n  c.md\n\
///      ./\n  a.md\n\
///      --- End Preview ---\n"
/// );
/// ```
pub fn write_preview(writer: &mut dyn Write, files: &[MatchedFile]) -> io::Result<()> {
    debug!("Writing preview for {} files", files.len());
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for file in files {
        groups
            .entry(file.parent_dir())
            .or_default()
            .push(file.file_name());
    }

    writeln!(
        writer,
        "{sep} Preview: {} files would be processed {sep}",
        files.len(),
        sep = SECTION_SEPARATOR
    )?;
    for (dir, names) in &groups {
        if dir.is_empty() {
            writeln!(writer, "./")?;
        } else {
            writeln!(writer, "{}/", dir)?;
        }
        for name in names {
            writeln!(writer, "  {}", name)?;
        }
    }
    writeln!(writer, "{} End Preview {}", SECTION_SEPARATOR, SECTION_SEPARATOR)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_preview_empty() -> io::Result<()> {
        let mut out = Vec::new();
        write_preview(&mut out, &[])?;
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "--- Preview: 0 files would be processed ---\n--- End Preview ---\n"
        );
        Ok(())
    }

    #[test]
    fn test_preview_nested_dirs_are_separate_groups() -> io::Result<()> {
        let files: Vec<MatchedFile> = ["docs/a.md", "docs/api/b.md"]
            .iter()
            .map(|p| MatchedFile {
                relative_path: PathBuf::from(p),
                ..Default::default()
            })
            .collect();
        let mut out = Vec::new();
        write_preview(&mut out, &files)?;
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("docs/\n  a.md\ndocs/api/\n  b.md\n"));
        Ok(())
    }
}
