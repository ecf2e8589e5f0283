// src/config/builder.rs

use super::{
    parsing::{normalize_extension, parse_max_size, split_list},
    validation::validate_builder_options,
    Config, Mode, OutputConfig, OutputFormat, SourceSpec, TraversalConfig,
};
use crate::cli::Cli;
use crate::constants::{DEFAULT_LLMS_BASENAME, DEFAULT_LLMS_FULL_BASENAME};
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// A builder for creating a `Config` programmatically or from parsed CLI arguments.
///
/// Every field is optional; `build()` fills defaults, parses list and size
/// values, and validates option combinations.
///
/// # Examples
///
/// ```
/// use llmstxt::config::{ConfigBuilder, Mode, SourceSpec};
///
/// let config = ConfigBuilder::new()
///     .local("docs")
///     .skip(vec!["drafts, archive".to_string()])
///     .exclude(vec![".TXT".to_string()])
///     .max_size("1")
///     .preview(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.source, SourceSpec::Local("docs".into()));
/// assert!(config.traversal.skip_dirs.contains("archive"));
/// assert!(config.traversal.exclude_extensions.contains("txt"));
/// assert_eq!(config.traversal.max_size, Some(1024 * 1024));
/// assert_eq!(config.mode, Mode::Preview);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) local: Option<String>,
    pub(super) github: Option<String>,
    pub(super) gitlab: Option<String>,
    pub(super) branch: Option<String>,
    pub(super) llms: Option<String>,
    pub(super) llms_full: Option<String>,
    pub(super) format: Option<OutputFormat>,
    pub(super) output_dir: Option<String>,
    pub(super) skip: Option<Vec<String>>,
    pub(super) exclude: Option<Vec<String>>,
    pub(super) max_size: Option<String>,
    pub(super) max_size_bytes: Option<u64>,
    pub(super) preview: Option<bool>,
    pub(super) interactive: Option<bool>,
    pub(super) summary: Option<bool>,
    pub(super) analyze: Option<bool>,
    pub(super) backup: Option<bool>,
    pub(super) no_title: Option<bool>,
    pub(super) keep_temp: Option<bool>,
    pub(super) use_api: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            local: cli.local,
            github: cli.github,
            gitlab: cli.gitlab,
            branch: cli.branch,
            llms: Some(cli.llms),
            llms_full: Some(cli.llms_full),
            format: Some(cli.format),
            output_dir: cli.output_dir,
            skip: cli.skip,
            exclude: cli.exclude,
            max_size: cli.max_size,
            max_size_bytes: None,
            preview: Some(cli.preview),
            interactive: Some(cli.interactive),
            summary: Some(cli.summary),
            analyze: Some(cli.analyze),
            backup: Some(cli.backup),
            no_title: Some(cli.no_title),
            keep_temp: Some(cli.keep_temp),
            use_api: Some(cli.api),
        }
    }

    /// Use a local directory as the source.
    pub fn local(mut self, path: impl Into<String>) -> Self {
        self.local = Some(path.into());
        self
    }
    /// Use a GitHub repository (`owner/repo` or URL) as the source.
    pub fn github(mut self, reference: impl Into<String>) -> Self {
        self.github = Some(reference.into());
        self
    }
    /// Use a GitLab repository (`owner/repo` or URL) as the source.
    pub fn gitlab(mut self, reference: impl Into<String>) -> Self {
        self.gitlab = Some(reference.into());
        self
    }
    /// Branch to clone for remote sources.
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
    /// Base name of the link index (default `llms`).
    pub fn llms(mut self, basename: impl Into<String>) -> Self {
        self.llms = Some(basename.into());
        self
    }
    /// Base name of the full-content dump (default `llms-full`).
    pub fn llms_full(mut self, basename: impl Into<String>) -> Self {
        self.llms_full = Some(basename.into());
        self
    }
    /// Extension of both outputs.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
    /// Directory the outputs are written to (default `.`).
    pub fn output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
    /// Directory names to skip; items may be comma- or space-separated lists.
    pub fn skip(mut self, names: Vec<String>) -> Self {
        self.skip = Some(names);
        self
    }
    /// Extensions to exclude; items may be comma- or space-separated lists.
    pub fn exclude(mut self, extensions: Vec<String>) -> Self {
        self.exclude = Some(extensions);
        self
    }
    /// Maximum file size as given on the command line (MB or with a unit).
    pub fn max_size(mut self, size: impl Into<String>) -> Self {
        self.max_size = Some(size.into());
        self
    }
    /// Maximum file size in bytes. Takes precedence over [`Self::max_size`].
    pub fn max_size_bytes(mut self, bytes: u64) -> Self {
        self.max_size_bytes = Some(bytes);
        self
    }
    /// Enable preview mode.
    pub fn preview(mut self, enabled: bool) -> Self {
        self.preview = Some(enabled);
        self
    }
    /// Enable per-file confirmation.
    pub fn interactive(mut self, enabled: bool) -> Self {
        self.interactive = Some(enabled);
        self
    }
    /// Print the written file list after writing.
    pub fn summary(mut self, enabled: bool) -> Self {
        self.summary = Some(enabled);
        self
    }
    /// Enable analyze mode.
    pub fn analyze(mut self, enabled: bool) -> Self {
        self.analyze = Some(enabled);
        self
    }
    /// Back up existing outputs before overwriting them.
    pub fn backup(mut self, enabled: bool) -> Self {
        self.backup = Some(enabled);
        self
    }
    /// Omit the heading line of the link index.
    pub fn no_title(mut self, enabled: bool) -> Self {
        self.no_title = Some(enabled);
        self
    }
    /// Leave the temporary clone directory on disk.
    pub fn keep_temp(mut self, enabled: bool) -> Self {
        self.keep_temp = Some(enabled);
        self
    }
    /// Fetch GitHub sources through the contents API.
    pub fn use_api(mut self, enabled: bool) -> Self {
        self.use_api = Some(enabled);
        self
    }

    /// Builds the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` for a missing or duplicated source, an
    /// invalid option combination, or an unparsable size.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let source = if let Some(path) = self.local {
            SourceSpec::Local(PathBuf::from(path))
        } else if let Some(reference) = self.github {
            SourceSpec::GitHub(reference)
        } else if let Some(reference) = self.gitlab {
            SourceSpec::GitLab(reference)
        } else {
            // validate_builder_options guarantees exactly one source
            return Err(Error::InvalidInput("No source given".to_string()));
        };

        let max_size = match (self.max_size_bytes, self.max_size) {
            (Some(bytes), _) => Some(bytes),
            (None, Some(raw)) => Some(parse_max_size(&raw)?),
            (None, None) => None,
        };

        let traversal = TraversalConfig {
            skip_dirs: split_list(&self.skip.unwrap_or_default())
                .into_iter()
                .collect(),
            exclude_extensions: split_list(&self.exclude.unwrap_or_default())
                .iter()
                .map(|e| normalize_extension(e))
                .filter(|e| !e.is_empty())
                .collect(),
            max_size,
        };

        let format = self.format.unwrap_or_default();
        let llms = non_empty_basename(self.llms, DEFAULT_LLMS_BASENAME, "--llms")?;
        let llms_full =
            non_empty_basename(self.llms_full, DEFAULT_LLMS_FULL_BASENAME, "--llms-full")?;
        if llms == llms_full {
            return Err(Error::InvalidInput(format!(
                "--llms and --llms-full must differ (both are '{}')",
                llms
            )));
        }
        let output_dir = PathBuf::from(self.output_dir.unwrap_or_else(|| ".".to_string()));
        let output = OutputConfig {
            link_index_path: output_dir.join(format!("{}.{}", llms, format.extension())),
            full_content_path: output_dir.join(format!("{}.{}", llms_full, format.extension())),
            output_dir,
            backup_existing: self.backup.unwrap_or(false),
            include_title: !self.no_title.unwrap_or(false),
        };

        let mode = if self.preview.unwrap_or(false) {
            Mode::Preview
        } else if self.interactive.unwrap_or(false) {
            Mode::Interactive
        } else if self.analyze.unwrap_or(false) {
            Mode::Analyze
        } else {
            Mode::Write
        };

        Ok(Config {
            source,
            branch: self.branch.filter(|b| !b.trim().is_empty()),
            traversal,
            output,
            mode,
            summary: self.summary.unwrap_or(false),
            keep_temp: self.keep_temp.unwrap_or(false),
            use_api: self.use_api.unwrap_or(false),
        })
    }
}

fn non_empty_basename(value: Option<String>, default: &str, flag: &str) -> Result<String> {
    let name = value.unwrap_or_else(|| default.to_string());
    let name = name.trim();
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidInput(format!(
            "{} must be a plain file name, got '{}'",
            flag, name
        )));
    }
    Ok(name.to_string())
}
