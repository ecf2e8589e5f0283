// src/cli.rs

use crate::config::OutputFormat;
use clap::{ArgGroup, Parser};

/// Collects documentation files into `llms.txt` and `llms-full.txt`.
///
/// llmstxt walks a local directory or a shallow clone of a GitHub/GitLab
/// repository, picks up documentation-like text files (.md, .mdx, .markdown,
/// .txt, .rst, .adoc), and writes a Markdown link index plus a dump of their
/// concatenated contents.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["local", "github", "gitlab"]),
))]
pub struct Cli {
    // --- Source Options ---
    /// Local directory to collect documentation from.
    #[arg(long, value_name = "DIR")]
    pub local: Option<String>,

    /// GitHub repository as `owner/repo` or a github.com URL (may point at a sub-folder).
    #[arg(long, value_name = "OWNER/REPO|URL")]
    pub github: Option<String>,

    /// GitLab repository as `owner/repo` or a gitlab.com URL (may point at a sub-folder).
    #[arg(long, value_name = "OWNER/REPO|URL")]
    pub gitlab: Option<String>,

    /// Branch to clone for remote sources (overrides a branch in the URL).
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Fetch GitHub sources through the contents API instead of `git clone`.
    /// Set GITHUB_TOKEN to raise rate limits.
    #[arg(long, action = clap::ArgAction::SetTrue, requires = "github")]
    pub api: bool,

    /// Leave the temporary clone directory on disk after the run.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub keep_temp: bool,

    // --- Output Options ---
    /// Base name of the link index file.
    #[arg(long, value_name = "BASENAME", default_value = "llms")]
    pub llms: String,

    /// Base name of the full-content file.
    #[arg(long = "llms-full", value_name = "BASENAME", default_value = "llms-full")]
    pub llms_full: String,

    /// Extension of both output files.
    #[arg(long, value_enum, default_value_t = OutputFormat::Txt)]
    pub format: OutputFormat,

    /// Directory to write the output files into.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Copy existing output files to `<name>.bak` before overwriting them.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub backup: bool,

    /// Do not start the link index with a `# <name>` heading.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_title: bool,

    // --- Filtering Options ---
    /// Directory names to skip (comma- or space-separated, repeatable).
    #[arg(long, value_name = "NAMES", num_args = 1..)]
    pub skip: Option<Vec<String>>,

    /// File extensions to exclude (comma- or space-separated, repeatable).
    #[arg(long, value_name = "EXTS", num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Maximum file size in MB (e.g. "2", "0.5"), or with a unit ("512KiB").
    #[arg(long, value_name = "MB")]
    pub max_size: Option<String>,

    // --- Modes ---
    /// List the files that would be collected, grouped by directory, without writing.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub preview: bool,

    /// Confirm each file before it is written.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub interactive: bool,

    /// List every written file after the outputs are written.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub summary: bool,

    /// Print file, folder, word and size statistics without writing.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub analyze: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_is_required() {
        let result = Cli::try_parse_from(["llmstxt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sources_conflict() {
        let result = Cli::try_parse_from(["llmstxt", "--local", ".", "--github", "a/b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = Cli::try_parse_from(["llmstxt", "--local", ".", "--frobnicate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_flags_accept_multiple_values() {
        let cli = Cli::try_parse_from([
            "llmstxt", "--local", ".", "--skip", "a", "b,c", "--exclude", "txt",
        ])
        .unwrap();
        assert_eq!(
            cli.skip,
            Some(vec!["a".to_string(), "b,c".to_string()])
        );
        assert_eq!(cli.exclude, Some(vec!["txt".to_string()]));
        assert_eq!(cli.format, OutputFormat::Txt);
        assert_eq!(cli.llms, "llms");
    }

    #[test]
    fn test_api_requires_github() {
        assert!(Cli::try_parse_from(["llmstxt", "--local", ".", "--api"]).is_err());
        assert!(Cli::try_parse_from(["llmstxt", "--github", "a/b", "--api"]).is_ok());
    }
}
