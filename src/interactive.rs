//! Per-file confirmation for `--interactive` runs.

use crate::cancellation::CancellationToken;
use crate::core_types::MatchedFile;
use crate::errors::{Error, Result};
use log::debug;
use std::io::{BufRead, Write};

/// Returns `true` for an affirmative answer (`y` or `yes`, any case).
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Asks once per file whether to include it and returns the confirmed files,
/// in their original order.
///
/// Prompts go to `output`; answers are read line by line from `input`. Any
/// answer other than `y`/`yes`, including end of input, declines the file.
///
/// # Errors
/// Returns `Error::Io` if the prompt cannot be written or the answer cannot be
/// read, and `Error::Interrupted` if the token is cancelled.
///
/// # Examples
///
/// ```
/// use llmstxt::core_types::MatchedFile;
/// use llmstxt::interactive::confirm_files;
/// use llmstxt::CancellationToken;
/// use std::path::PathBuf;
///
/// let files: Vec<MatchedFile> = ["a.md", "b.md", "c.md"]
///     .iter()
///     .map(|p| MatchedFile { relative_path: PathBuf::from(p), ..Default::default() })
///     .collect();
/// let mut input: &[u8] = b"y\nno\n";
/// let mut prompts = Vec::new();
/// let kept = confirm_files(files, &mut input, &mut prompts, &CancellationToken::new()).unwrap();
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].display_path(), "a.md");
/// ```
pub fn confirm_files(
    files: Vec<MatchedFile>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    token: &CancellationToken,
) -> Result<Vec<MatchedFile>> {
    let stdio_err = |e| Error::Io {
        path: "<stdio>".to_string(),
        source: e,
    };

    let mut confirmed = Vec::with_capacity(files.len());
    let mut answer = String::new();
    for file in files {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        write!(output, "Include {}? [y/N] ", file.display_path()).map_err(stdio_err)?;
        output.flush().map_err(stdio_err)?;

        answer.clear();
        let read = input.read_line(&mut answer).map_err(stdio_err)?;
        if read == 0 {
            // End of input: this and every remaining file are declined.
            writeln!(output).map_err(stdio_err)?;
            debug!("Input closed; declining remaining files");
            break;
        }
        if is_yes(&answer) {
            confirmed.push(file);
        }
    }
    Ok(confirmed)
}
