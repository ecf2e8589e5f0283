// src/output/link_index.rs

use crate::core_types::MatchedFile;
use std::io::{self, Write};

/// Writes the link index: an optional `# <title>` heading followed by a blank
/// line, then one Markdown link per file in the given order.
///
/// The link text is the file's base name and the target is its path relative
/// to the walk root, always with `/` separators.
///
/// # Examples
///
/// ```
/// use llmstxt::core_types::MatchedFile;
/// use llmstxt::output::link_index::write_link_index;
/// use std::path::PathBuf;
///
/// let files = vec![MatchedFile {
///     relative_path: PathBuf::from("docs/guide.md"),
///     ..Default::default()
/// }];
/// let mut out = Vec::new();
/// write_link_index(&mut out, &files, Some("cargo")).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "# cargo\n\n- [guide.md](docs/guide.md)\n");
/// ```
pub fn write_link_index(
    writer: &mut dyn Write,
    files: &[MatchedFile],
    title: Option<&str>,
) -> io::Result<()> {
    if let Some(title) = title {
        writeln!(writer, "# {}", title)?;
        writeln!(writer)?;
    }
    for file in files {
        writeln!(writer, "- [{}]({})", file.file_name(), file.display_path())?;
    }
    Ok(())
}
