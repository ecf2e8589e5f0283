//! Defines the core `Config` struct and related types for application configuration.
//!
//! All CLI flags are folded into one immutable `Config` value that is passed by
//! reference to each pipeline stage. Nothing here touches the filesystem or the
//! network; resolving the source happens later in [`crate::source`].

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
mod validation;

pub use parsing::{normalize_extension, parse_max_size, split_list};

/// Where the documentation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// A directory on the local filesystem.
    Local(PathBuf),
    /// A GitHub repository given as `owner/repo` or a web URL.
    GitHub(String),
    /// A GitLab repository given as `owner/repo` or a web URL.
    GitLab(String),
}

impl SourceSpec {
    /// Returns `true` for sources that must be cloned or downloaded.
    pub fn is_remote(&self) -> bool {
        !matches!(self, SourceSpec::Local(_))
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::Local(path) => write!(f, "{}", path.display()),
            SourceSpec::GitHub(reference) => write!(f, "github:{}", reference),
            SourceSpec::GitLab(reference) => write!(f, "gitlab:{}", reference),
        }
    }
}

/// Extension used for both output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text (`.txt`), the convention's default.
    #[default]
    Txt,
    /// Markdown (`.md`).
    Md,
    /// reStructuredText (`.rst`).
    Rst,
}

impl OutputFormat {
    /// The file extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Md => "md",
            OutputFormat::Rst => "rst",
        }
    }
}

/// What a run does with the matched file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write both outputs.
    #[default]
    Write,
    /// List matched files grouped by directory; write nothing.
    Preview,
    /// Ask per file before writing; only confirmed files are written.
    Interactive,
    /// Print aggregate statistics; write nothing.
    Analyze,
}

/// Filters applied by the directory walk. Immutable for one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Directory names whose whole subtree is skipped.
    pub skip_dirs: BTreeSet<String>,
    /// Lowercase extensions (no leading dot) that disqualify a file.
    pub exclude_extensions: BTreeSet<String>,
    /// Maximum file size in bytes. Files strictly larger are skipped.
    pub max_size: Option<u64>,
}

/// Where and how the two outputs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory both outputs are written into.
    pub output_dir: PathBuf,
    /// Full path of the link index (`<output_dir>/<llms>.<format>`).
    pub link_index_path: PathBuf,
    /// Full path of the full-content dump (`<output_dir>/<llms-full>.<format>`).
    pub full_content_path: PathBuf,
    /// Copy existing outputs to `<name>.bak` before overwriting them.
    pub backup_existing: bool,
    /// Start the link index with a `# <name>` heading.
    pub include_title: bool,
}

/// The immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// The documentation source.
    pub source: SourceSpec,
    /// Branch to clone for remote sources; overrides a branch embedded in the URL.
    pub branch: Option<String>,
    /// Walk filters.
    pub traversal: TraversalConfig,
    /// Output locations and options.
    pub output: OutputConfig,
    /// Selected interaction mode.
    pub mode: Mode,
    /// Print the written file list after writing.
    pub summary: bool,
    /// Leave the temporary clone directory on disk after the run.
    pub keep_temp: bool,
    /// Fetch GitHub sources through the contents API instead of `git clone`.
    pub use_api: bool,
}

impl Config {
    /// Creates a default `Config` for a local source, for tests and doc tests.
    #[doc(hidden)]
    pub fn new_for_test(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            source: SourceSpec::Local(root.clone()),
            branch: None,
            traversal: TraversalConfig::default(),
            output: OutputConfig {
                link_index_path: root.join("llms.txt"),
                full_content_path: root.join("llms-full.txt"),
                output_dir: root,
                backup_existing: false,
                include_title: true,
            },
            mode: Mode::Write,
            summary: false,
            keep_temp: false,
            use_api: false,
        }
    }
}
