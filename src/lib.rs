//! `llmstxt` is a library and command-line tool that gathers documentation
//! files (`.md`, `.rst`, `.txt`, ...) from a local directory or a GitHub/GitLab
//! repository and bundles them into two files, following the `llms.txt`
//! convention:
//!
//! - a **link index** (`llms.txt`): one Markdown link per documentation file;
//! - a **full-content dump** (`llms-full.txt`): every file's content,
//!   concatenated in traversal order and separated by blank lines.
//!
//! The pipeline has four stages that can also be used on their own:
//! 1.  **Locate**: resolve the source to a local directory, shallow-cloning
//!     remote repositories into a temporary directory ([`source::locate`]).
//! 2.  **Discover**: walk the directory and filter by directory name,
//!     extension and size ([`discover_files`]).
//! 3.  **Read**: load file contents in parallel, in traversal order
//!     ([`processing::read_contents`]).
//! 4.  **Write**: render both outputs ([`output::write_outputs`]), or report
//!     instead in preview and analyze modes.
//!
//! # Example: Library Usage
//!
//! ```
//! use llmstxt::{execute, ConfigBuilder, CancellationToken, RunOutcome};
//! use llmstxt::progress::NoOpProgress;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let docs = tempdir().unwrap();
//! fs::create_dir(docs.path().join("guide")).unwrap();
//! fs::write(docs.path().join("README.md"), "# Project\n").unwrap();
//! fs::write(docs.path().join("guide/install.md"), "Run the installer.\n").unwrap();
//! let out = tempdir().unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .local(docs.path().to_str().unwrap())
//!     .output_dir(out.path().to_str().unwrap())
//!     .no_title(true)
//!     .build()
//!     .unwrap();
//!
//! let mut stdout = Vec::new();
//! let mut stdin: &[u8] = b"";
//! let outcome = execute(&config, &CancellationToken::new(), &NoOpProgress, &mut stdout, &mut stdin).unwrap();
//! assert!(matches!(outcome, RunOutcome::Written { files: 2, .. }));
//!
//! let index = fs::read_to_string(out.path().join("llms.txt")).unwrap();
//! assert!(index.contains("- [install.md](guide/install.md)\n"));
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod interactive;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod progress;
pub mod signal;
pub mod source;

pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, Mode};
use config::OutputConfig;
pub use core_types::{DocStats, MatchedFile};
pub use discovery::discover_files;
pub use errors::{Error, Result};

use crate::errors::io_error_with_path;
use crate::progress::ProgressReporter;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// What a completed run did.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Both outputs were written.
    Written {
        /// Number of files included in the outputs.
        files: usize,
        link_index: PathBuf,
        full_content: PathBuf,
    },
    /// The preview listing was printed; nothing was written.
    Previewed { files: usize },
    /// Statistics were printed; nothing was written.
    Analyzed(DocStats),
}

fn stdout_error(e: io::Error) -> Error {
    io_error_with_path(e, "<stdout>")
}

/// Executes the complete pipeline for one run.
///
/// Reports (preview, summary, analysis) and interactive prompts go to `out`;
/// interactive answers are read from `input`. Any temporary clone is removed
/// before this function returns, unless the configuration asks to keep it.
///
/// # Errors
/// Returns `Error::NoFilesFound` if no file is left to process after
/// filtering and confirmation. Other errors are propagated from the stages.
pub fn execute(
    config: &Config,
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<RunOutcome> {
    info!("Collecting documentation from {}", config.source);
    let source = source::locate(config, token, progress)?;
    info!("Scanning {}", source.root.display());

    let mut files = discover_files(&source.root, &config.traversal, token)?;
    if !config.source.is_remote() {
        files = without_own_outputs(files, &config.output);
    }
    debug!("Discovered {} documentation files", files.len());

    let outcome = match config.mode {
        Mode::Preview => {
            if files.is_empty() {
                return Err(Error::NoFilesFound);
            }
            output::preview::write_preview(out, &files).map_err(stdout_error)?;
            RunOutcome::Previewed { files: files.len() }
        }
        Mode::Analyze => {
            if files.is_empty() {
                return Err(Error::NoFilesFound);
            }
            let contents = processing::read_contents(&files, token, progress)?;
            let stats = processing::compute_stats(&files, &contents);
            output::analyze::write_analysis(out, &stats).map_err(stdout_error)?;
            RunOutcome::Analyzed(stats)
        }
        Mode::Write | Mode::Interactive => {
            let files = if config.mode == Mode::Interactive {
                interactive::confirm_files(files, input, out, token)?
            } else {
                files
            };
            if files.is_empty() {
                return Err(Error::NoFilesFound);
            }

            let contents = processing::read_contents(&files, token, progress)?;
            if token.is_cancelled() {
                return Err(Error::Interrupted);
            }
            output::write_outputs(&files, &contents, &source.name, &config.output)?;
            info!(
                "Wrote {} and {}",
                config.output.link_index_path.display(),
                config.output.full_content_path.display()
            );

            if config.summary {
                output::summary::write_summary(
                    out,
                    &files,
                    &config.output.link_index_path,
                    &config.output.full_content_path,
                )
                .map_err(stdout_error)?;
            }
            RunOutcome::Written {
                files: files.len(),
                link_index: config.output.link_index_path.clone(),
                full_content: config.output.full_content_path.clone(),
            }
        }
    };
    out.flush().map_err(stdout_error)?;

    if let Some(temp) = source.temp_path() {
        debug!("Removing temporary directory {}", temp.display());
    }
    Ok(outcome)
}

/// Drops the outputs of this run from the file list.
///
/// With the default output directory `.`, a local run walks over the files it
/// wrote last time; reading them back would grow both outputs on every rerun.
fn without_own_outputs(files: Vec<MatchedFile>, output: &OutputConfig) -> Vec<MatchedFile> {
    let own: Vec<PathBuf> = [&output.link_index_path, &output.full_content_path]
        .into_iter()
        .filter_map(|path| path.canonicalize().ok())
        .collect();
    if own.is_empty() {
        return files;
    }
    files
        .into_iter()
        .filter(|file| {
            let is_own = own.contains(&file.absolute_path);
            if is_own {
                debug!("Skipping own output file: {}", file.display_path());
            }
            !is_own
        })
        .collect()
}

/// Runs the pipeline against the process's stdin and stdout.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
) -> Result<RunOutcome> {
    let stdout = io::stdout();
    let stdin = io::stdin();
    let mut out = stdout.lock();
    let mut input = stdin.lock();
    execute(config, token, progress, &mut out, &mut input)
}
