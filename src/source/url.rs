//! Handles parsing of GitHub and GitLab repository references.

use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::{Component, Path};
use url::Url;

/// The hosting service a remote source lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    GitHub,
    GitLab,
}

impl Host {
    /// The canonical domain of the host.
    pub fn domain(self) -> &'static str {
        match self {
            Host::GitHub => "github.com",
            Host::GitLab => "gitlab.com",
        }
    }

    fn matches_domain(self, domain: &str) -> bool {
        let domain = domain.to_ascii_lowercase();
        domain == self.domain() || domain.strip_prefix("www.") == Some(self.domain())
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::GitHub => write!(f, "GitHub"),
            Host::GitLab => write!(f, "GitLab"),
        }
    }
}

/// A parsed reference to a remote repository, optionally narrowed to a
/// branch and a folder inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepo {
    pub host: Host,
    /// The owner, or the full group path for GitLab (`group/subgroup`).
    pub owner: String,
    /// The repository name, without a `.git` suffix.
    pub repo: String,
    /// Branch embedded in a folder URL.
    pub branch: Option<String>,
    /// Folder inside the repository embedded in a folder URL.
    pub subpath: Option<String>,
}

impl RemoteRepo {
    /// The HTTPS URL handed to `git clone`.
    pub fn clone_url(&self) -> String {
        format!(
            "https://{}/{}/{}.git",
            self.host.domain(),
            self.owner,
            self.repo
        )
    }
}

/// A single owner, group or repository path segment.
static SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.][A-Za-z0-9_.-]*$").expect("valid segment regex"));

/// Parses `owner/repo` shorthand or a web URL for the given host.
///
/// Accepted forms:
/// - `owner/repo` (GitLab also takes nested groups: `group/sub/repo`)
/// - `https://github.com/owner/repo`, with optional `.git` and trailing slash
/// - `https://github.com/owner/repo/tree/<branch>/<subpath>`
/// - `https://gitlab.com/group/sub/repo/-/tree/<branch>/<subpath>`
///
/// # Errors
/// Returns `Error::InvalidInput` for malformed references and for URLs that
/// point at a different host.
///
/// # Examples
/// ```
/// use llmstxt::source::{parse_remote, Host};
///
/// let repo = parse_remote(Host::GitHub, "https://github.com/rust-lang/cargo/tree/master/src/doc").unwrap();
/// assert_eq!(repo.owner, "rust-lang");
/// assert_eq!(repo.repo, "cargo");
/// assert_eq!(repo.branch.as_deref(), Some("master"));
/// assert_eq!(repo.subpath.as_deref(), Some("src/doc"));
/// assert_eq!(repo.clone_url(), "https://github.com/rust-lang/cargo.git");
///
/// let repo = parse_remote(Host::GitLab, "gitlab-org/cli").unwrap();
/// assert_eq!(repo.clone_url(), "https://gitlab.com/gitlab-org/cli.git");
///
/// assert!(parse_remote(Host::GitHub, "https://gitlab.com/owner/repo").is_err());
/// ```
pub fn parse_remote(host: Host, reference: &str) -> Result<RemoteRepo> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(Error::InvalidInput(format!(
            "Empty {} repository reference",
            host
        )));
    }

    let segments = if reference.starts_with("https://") || reference.starts_with("http://") {
        url_segments(host, reference)?
    } else if let Some(rest) = reference
        .strip_prefix(host.domain())
        .and_then(|r| r.strip_prefix('/'))
    {
        split_segments(rest)
    } else {
        split_segments(reference)
    };

    let parsed = match host {
        Host::GitHub => parse_github_segments(&segments),
        Host::GitLab => parse_gitlab_segments(&segments),
    };
    parsed.ok_or_else(|| {
        Error::InvalidInput(format!(
            "Could not parse {} repository from '{}'. Expected owner/repo or a {} URL",
            host,
            reference,
            host.domain()
        ))
    })
}

fn url_segments(host: Host, reference: &str) -> Result<Vec<String>> {
    let url = Url::parse(reference)
        .map_err(|e| Error::InvalidInput(format!("Malformed URL '{}': {}", reference, e)))?;
    match url.host_str() {
        Some(domain) if host.matches_domain(domain) => {}
        _ => {
            return Err(Error::InvalidInput(format!(
                "'{}' is not a {} URL",
                reference, host
            )))
        }
    }
    Ok(split_segments(url.path()))
}

fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn repo_name(segment: &str) -> Option<String> {
    let name = segment.strip_suffix(".git").unwrap_or(segment);
    SEGMENT_RE.is_match(name).then(|| name.to_string())
}

/// Parses the `tree/<branch>/<subpath...>` tail of a folder URL.
///
/// Sub-path segments must be plain names, so the walk root stays inside the
/// clone.
fn parse_tree_tail(tail: &[String]) -> Option<(Option<String>, Option<String>)> {
    match tail {
        [] => Some((None, None)),
        [tree, branch, rest @ ..] if tree == "tree" => {
            if !rest.iter().all(|s| is_plain_segment(s)) {
                return None;
            }
            let subpath = (!rest.is_empty()).then(|| rest.join("/"));
            Some((Some(branch.clone()), subpath))
        }
        _ => None,
    }
}

fn is_plain_segment(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn parse_github_segments(segments: &[String]) -> Option<RemoteRepo> {
    let [owner, repo, tail @ ..] = segments else {
        return None;
    };
    if !SEGMENT_RE.is_match(owner) {
        return None;
    }
    let (branch, subpath) = parse_tree_tail(tail)?;
    Some(RemoteRepo {
        host: Host::GitHub,
        owner: owner.clone(),
        repo: repo_name(repo)?,
        branch,
        subpath,
    })
}

fn parse_gitlab_segments(segments: &[String]) -> Option<RemoteRepo> {
    // GitLab separates the project path from routes like `tree` with a `-` segment.
    let (project, tail) = match segments.iter().position(|s| s == "-") {
        Some(idx) => (&segments[..idx], &segments[idx + 1..]),
        None => (segments, &segments[segments.len()..]),
    };
    let (repo, groups) = project.split_last()?;
    if groups.is_empty() || !groups.iter().all(|g| SEGMENT_RE.is_match(g)) {
        return None;
    }
    let (branch, subpath) = parse_tree_tail(tail)?;
    Some(RemoteRepo {
        host: Host::GitLab,
        owner: groups.join("/"),
        repo: repo_name(repo)?,
        branch,
        subpath,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github(reference: &str) -> RemoteRepo {
        parse_remote(Host::GitHub, reference).unwrap()
    }

    fn gitlab(reference: &str) -> RemoteRepo {
        parse_remote(Host::GitLab, reference).unwrap()
    }

    #[test]
    fn test_github_shorthand() {
        let repo = github("BurntSushi/ripgrep");
        assert_eq!(repo.owner, "BurntSushi");
        assert_eq!(repo.repo, "ripgrep");
        assert_eq!(repo.branch, None);
        assert_eq!(repo.subpath, None);
    }

    #[test]
    fn test_github_url_variants() {
        for reference in [
            "https://github.com/BurntSushi/ripgrep",
            "https://github.com/BurntSushi/ripgrep/",
            "https://github.com/BurntSushi/ripgrep.git",
            "https://www.github.com/BurntSushi/ripgrep",
            "github.com/BurntSushi/ripgrep",
        ] {
            let repo = github(reference);
            assert_eq!(repo.clone_url(), "https://github.com/BurntSushi/ripgrep.git", "{}", reference);
        }
    }

    #[test]
    fn test_github_folder_url() {
        let repo = github("https://github.com/BurntSushi/ripgrep/tree/master/crates/ignore/");
        assert_eq!(repo.branch.as_deref(), Some("master"));
        assert_eq!(repo.subpath.as_deref(), Some("crates/ignore"));
    }

    #[test]
    fn test_github_tree_without_subpath() {
        let repo = github("https://github.com/BurntSushi/ripgrep/tree/dev");
        assert_eq!(repo.branch.as_deref(), Some("dev"));
        assert_eq!(repo.subpath, None);
    }

    #[test]
    fn test_github_rejects_malformed() {
        for reference in [
            "ripgrep",
            "",
            "https://github.com/BurntSushi",
            "https://github.com/BurntSushi/ripgrep/issues/1",
            "https://github.com/BurntSushi/ripgrep/tree",
            "https://gitlab.com/BurntSushi/ripgrep",
            "owner/repo with space",
        ] {
            assert!(
                matches!(parse_remote(Host::GitHub, reference), Err(Error::InvalidInput(_))),
                "{:?} should be rejected",
                reference
            );
        }
    }

    #[test]
    fn test_subpath_cannot_leave_the_repository() {
        for reference in [
            "owner/repo/tree/main/../../..",
            "owner/repo/tree/main/docs/../..",
            "github.com/owner/repo/tree/main/./docs",
        ] {
            assert!(
                matches!(parse_remote(Host::GitHub, reference), Err(Error::InvalidInput(_))),
                "{:?} should be rejected",
                reference
            );
        }
        assert!(parse_remote(Host::GitLab, "group/project/-/tree/main/..").is_err());

        // URLs are normalized before their path is split.
        let repo = github("https://github.com/owner/repo/tree/main/docs/../guide");
        assert_eq!(repo.subpath.as_deref(), Some("guide"));
    }

    #[test]
    fn test_gitlab_nested_groups() {
        let repo = gitlab("https://gitlab.com/group/subgroup/project");
        assert_eq!(repo.owner, "group/subgroup");
        assert_eq!(repo.repo, "project");
        assert_eq!(repo.clone_url(), "https://gitlab.com/group/subgroup/project.git");
    }

    #[test]
    fn test_gitlab_folder_url() {
        let repo = gitlab("https://gitlab.com/group/project/-/tree/main/docs/user");
        assert_eq!(repo.owner, "group");
        assert_eq!(repo.repo, "project");
        assert_eq!(repo.branch.as_deref(), Some("main"));
        assert_eq!(repo.subpath.as_deref(), Some("docs/user"));
    }

    #[test]
    fn test_gitlab_rejects_single_segment_and_other_routes() {
        assert!(parse_remote(Host::GitLab, "project").is_err());
        assert!(parse_remote(Host::GitLab, "https://gitlab.com/group/project/-/issues/3").is_err());
        assert!(parse_remote(Host::GitLab, "https://github.com/group/project").is_err());
    }
}
