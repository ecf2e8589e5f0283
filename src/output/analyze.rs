// src/output/analyze.rs

use crate::constants::SECTION_SEPARATOR;
use crate::core_types::DocStats;
use std::io::{self, Write};

/// Writes the analyze-mode report.
///
/// # Examples
///
/// ```
/// use llmstxt::core_types::DocStats;
/// use llmstxt::output::analyze::write_analysis;
///
/// let stats = DocStats { file_count: 2, folder_count: 1, total_words: 30, total_bytes: 155 };
/// let mut out = Vec::new();
/// write_analysis(&mut out, &stats).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Words: 30\n"));
/// assert!(text.contains("Average size: 77.50 bytes\n"));
/// ```
pub fn write_analysis(writer: &mut dyn Write, stats: &DocStats) -> io::Result<()> {
    writeln!(writer, "{} Analysis {}", SECTION_SEPARATOR, SECTION_SEPARATOR)?;
    writeln!(writer, "Files: {}", stats.file_count)?;
    writeln!(writer, "Folders: {}", stats.folder_count)?;
    writeln!(writer, "Words: {}", stats.total_words)?;
    writeln!(writer, "Total size: {} bytes", stats.total_bytes)?;
    writeln!(writer, "Average size: {:.2} bytes", stats.average_size())?;
    Ok(())
}
