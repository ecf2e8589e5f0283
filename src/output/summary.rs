// src/output/summary.rs

use crate::constants::SECTION_SEPARATOR;
use crate::core_types::{display_path, MatchedFile};
use std::io::{self, Write};
use std::path::Path;

/// Writes the post-write summary: every written file path in output order,
/// then the two output paths.
pub fn write_summary(
    writer: &mut dyn Write,
    files: &[MatchedFile],
    link_index: &Path,
    full_content: &Path,
) -> io::Result<()> {
    writeln!(writer, "{} Summary {}", SECTION_SEPARATOR, SECTION_SEPARATOR)?;
    writeln!(writer, "Processed files ({}):", files.len())?;
    for file in files {
        writeln!(writer, "- {}", file.display_path())?;
    }
    writeln!(writer, "Link index: {}", display_path(link_index))?;
    writeln!(writer, "Full content: {}", display_path(full_content))?;
    Ok(())
}
