// src/output/full_content.rs

use std::io::{self, Write};

/// Concatenates file contents in order, separated by exactly one blank line.
///
/// If a file's content already ends with `\n`, only one more `\n` is written
/// before the next file; otherwise two. Nothing is written after the last
/// file, so a single file is reproduced byte for byte.
///
/// # Examples
///
/// ```
/// use llmstxt::output::full_content::write_full_content;
///
/// let mut out = Vec::new();
/// write_full_content(&mut out, &[b"# A\n".to_vec(), b"# B".to_vec(), b"# C\n".to_vec()]).unwrap();
/// assert_eq!(out, b"# A\n\n# B\n\n# C\n");
/// ```
pub fn write_full_content(writer: &mut dyn Write, contents: &[Vec<u8>]) -> io::Result<()> {
    let mut previous: Option<&[u8]> = None;
    for content in contents {
        if let Some(prev) = previous {
            if prev.ends_with(b"\n") {
                writer.write_all(b"\n")?;
            } else {
                writer.write_all(b"\n\n")?;
            }
        }
        writer.write_all(content)?;
        previous = Some(content);
    }
    Ok(())
}
