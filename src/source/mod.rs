// src/source/mod.rs
//! Resolves the documentation source into a local directory.
//!
//! Local sources are used in place. Remote sources are shallow-cloned with
//! `git` (or downloaded through the GitHub API with `--api`) into a temporary
//! directory that lives exactly as long as the returned [`ResolvedSource`].

mod clone;
mod url;

#[cfg(feature = "api")]
mod api;

pub use self::url::{parse_remote, Host, RemoteRepo};
pub use clone::clone_repo;

use crate::cancellation::CancellationToken;
use crate::config::{Config, SourceSpec};
use crate::constants::TEMP_DIR_PREFIX;
use crate::errors::{io_error_with_path, Error, Result};
use crate::progress::ProgressReporter;
use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A source that is ready to be walked.
#[derive(Debug)]
pub struct ResolvedSource {
    /// The directory the walk starts from.
    pub root: PathBuf,
    /// Display name used as the link index title.
    pub name: String,
    /// Owns the temporary clone; dropping it removes the directory.
    temp: Option<TempDir>,
}

impl ResolvedSource {
    /// The temporary directory backing a remote source, while it is owned.
    pub fn temp_path(&self) -> Option<&Path> {
        self.temp.as_ref().map(TempDir::path)
    }
}

/// Resolves the configured source into a walkable directory.
///
/// # Errors
/// - `Error::InvalidInput` for a missing local directory, a malformed remote
///   reference, or a sub-path that does not exist in the repository.
/// - `Error::CloneFailed` / `Error::Network` when fetching a remote fails.
/// - `Error::Interrupted` if the token was cancelled while fetching.
pub fn locate(
    config: &Config,
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
) -> Result<ResolvedSource> {
    match &config.source {
        SourceSpec::Local(path) => locate_local(path),
        SourceSpec::GitHub(reference) => {
            locate_remote(parse_remote(Host::GitHub, reference)?, config, token, progress)
        }
        SourceSpec::GitLab(reference) => {
            locate_remote(parse_remote(Host::GitLab, reference)?, config, token, progress)
        }
    }
}

fn locate_local(path: &Path) -> Result<ResolvedSource> {
    let root = path.canonicalize().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::InvalidInput(format!("Local path '{}' does not exist", path.display()))
        } else {
            io_error_with_path(e, path)
        }
    })?;
    if !root.is_dir() {
        return Err(Error::InvalidInput(format!(
            "Local path '{}' is not a directory",
            path.display()
        )));
    }
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    debug!("Using local directory: {}", root.display());
    Ok(ResolvedSource {
        root,
        name,
        temp: None,
    })
}

fn locate_remote(
    repo: RemoteRepo,
    config: &Config,
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
) -> Result<ResolvedSource> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }
    // An explicit --branch wins over one embedded in the URL.
    let branch = config.branch.clone().or_else(|| repo.branch.clone());

    materialize(&repo, config.keep_temp, token, |dest| {
        fetch(&repo, branch.as_deref(), config, dest, token, progress)
    })
}

/// Fetches `repo` into a fresh temporary directory and roots the walk at its
/// sub-path.
///
/// The directory is removed when the returned source is dropped, or right
/// away if anything fails. With `keep_temp` it is left on disk instead.
fn materialize<F>(
    repo: &RemoteRepo,
    keep_temp: bool,
    token: &CancellationToken,
    fetch: F,
) -> Result<ResolvedSource>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp = tempfile::Builder::new()
        .prefix(TEMP_DIR_PREFIX)
        .tempdir()
        .map_err(|e| io_error_with_path(e, std::env::temp_dir()))?;

    fetch(temp.path()).map_err(|e| {
        // A killed git child reports a generic failure; report the interrupt instead.
        if token.is_cancelled() {
            Error::Interrupted
        } else {
            e
        }
    })?;

    let root = match &repo.subpath {
        Some(subpath) => temp.path().join(subpath),
        None => temp.path().to_path_buf(),
    };
    if !root.is_dir() {
        return Err(Error::InvalidInput(format!(
            "Path '{}' not found in {}/{}",
            repo.subpath.as_deref().unwrap_or_default(),
            repo.owner,
            repo.repo
        )));
    }

    let temp = if keep_temp {
        let kept = temp.keep();
        info!("Keeping temporary clone at {}", kept.display());
        None
    } else {
        Some(temp)
    };

    Ok(ResolvedSource {
        root,
        name: repo.repo.clone(),
        temp,
    })
}

fn fetch(
    repo: &RemoteRepo,
    branch: Option<&str>,
    config: &Config,
    dest: &Path,
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
) -> Result<()> {
    if config.use_api {
        return fetch_via_api(repo, branch, config, dest, token, progress);
    }
    let url = repo.clone_url();
    info!("Cloning {}", url);
    progress.set_message(format!("Cloning {}...", url));
    clone_repo(&url, branch, dest)?;
    progress.finish_with_message("Clone complete".to_string());
    Ok(())
}

#[cfg(feature = "api")]
fn fetch_via_api(
    repo: &RemoteRepo,
    branch: Option<&str>,
    config: &Config,
    dest: &Path,
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
) -> Result<()> {
    if repo.host != Host::GitHub {
        return Err(Error::InvalidInput(
            "--api is only supported for GitHub sources".to_string(),
        ));
    }
    api::download_via_api(repo, branch, &config.traversal, dest, token, progress)
}

#[cfg(not(feature = "api"))]
fn fetch_via_api(
    _repo: &RemoteRepo,
    _branch: Option<&str>,
    _config: &Config,
    _dest: &Path,
    _token: &CancellationToken,
    _progress: &dyn ProgressReporter,
) -> Result<()> {
    Err(Error::InvalidInput(
        "--api requires llmstxt to be built with the `api` feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoOpProgress;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_local_source_name_and_root() -> Result<()> {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("my-project");
        fs::create_dir(&dir).unwrap();
        let config = Config::new_for_test(&dir);

        let resolved = locate(&config, &CancellationToken::new(), &NoOpProgress)?;
        assert_eq!(resolved.name, "my-project");
        assert_eq!(resolved.root, dir.canonicalize().unwrap());
        assert!(resolved.temp_path().is_none());
        Ok(())
    }

    #[test]
    fn test_local_source_missing() {
        let temp = tempdir().unwrap();
        let config = Config::new_for_test(temp.path().join("missing"));
        let result = locate(&config, &CancellationToken::new(), &NoOpProgress);
        assert!(matches!(result, Err(Error::InvalidInput(msg)) if msg.contains("does not exist")));
    }

    #[test]
    fn test_local_source_is_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("README.md");
        fs::write(&file, "x").unwrap();
        let config = Config::new_for_test(&file);
        let result = locate(&config, &CancellationToken::new(), &NoOpProgress);
        assert!(matches!(result, Err(Error::InvalidInput(msg)) if msg.contains("not a directory")));
    }

    #[test]
    fn test_remote_malformed_is_invalid_input() {
        let temp = tempdir().unwrap();
        let mut config = Config::new_for_test(temp.path());
        config.source = SourceSpec::GitHub("not-a-repo".to_string());
        let result = locate(&config, &CancellationToken::new(), &NoOpProgress);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_remote_cancelled_before_fetch() {
        let temp = tempdir().unwrap();
        let mut config = Config::new_for_test(temp.path());
        config.source = SourceSpec::GitHub("owner/repo".to_string());
        let token = CancellationToken::new();
        token.cancel();
        let result = locate(&config, &token, &NoOpProgress);
        assert!(matches!(result, Err(Error::Interrupted)));
    }

    fn docs_repo(reference: &str) -> RemoteRepo {
        parse_remote(Host::GitHub, reference).unwrap()
    }

    fn write_docs(dest: &Path) -> Result<()> {
        fs::create_dir_all(dest.join("docs/guide")).unwrap();
        fs::write(dest.join("README.md"), "# Top\n").unwrap();
        fs::write(dest.join("docs/guide/intro.md"), "Intro\n").unwrap();
        Ok(())
    }

    #[test]
    fn test_remote_root_is_subpath_under_clone() -> Result<()> {
        let repo = docs_repo("owner/project/tree/main/docs");
        let resolved = materialize(&repo, false, &CancellationToken::new(), write_docs)?;

        let temp = resolved.temp_path().unwrap().to_path_buf();
        assert_eq!(resolved.root, temp.join("docs"));
        assert_eq!(resolved.name, "project");
        assert!(resolved
            .temp_path()
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(TEMP_DIR_PREFIX));
        Ok(())
    }

    #[test]
    fn test_remote_missing_subpath_is_invalid_input() {
        let repo = docs_repo("owner/project/tree/main/manual");
        let mut fetched_into = None;
        let result = materialize(&repo, false, &CancellationToken::new(), |dest| {
            fetched_into = Some(dest.to_path_buf());
            write_docs(dest)
        });
        assert!(
            matches!(result, Err(Error::InvalidInput(ref msg)) if msg.contains("'manual' not found in owner/project")),
            "{:?}",
            result
        );
        assert!(!fetched_into.unwrap().exists());
    }

    #[test]
    fn test_remote_temp_dir_removed_on_drop() -> Result<()> {
        let repo = docs_repo("owner/project");
        let resolved = materialize(&repo, false, &CancellationToken::new(), write_docs)?;
        let temp = resolved.temp_path().unwrap().to_path_buf();
        assert!(temp.join("README.md").is_file());

        drop(resolved);
        assert!(!temp.exists());
        Ok(())
    }

    #[test]
    fn test_remote_temp_dir_kept_with_keep_temp() -> Result<()> {
        let repo = docs_repo("owner/project");
        let resolved = materialize(&repo, true, &CancellationToken::new(), write_docs)?;
        assert!(resolved.temp_path().is_none());
        let root = resolved.root.clone();

        drop(resolved);
        assert!(root.join("README.md").is_file());
        fs::remove_dir_all(&root).unwrap();
        Ok(())
    }

    #[test]
    fn test_remote_fetch_failure_after_cancel_is_interrupted() {
        let repo = docs_repo("owner/project");
        let token = CancellationToken::new();
        let result = materialize(&repo, false, &token, |_| {
            token.cancel();
            Err(Error::CloneFailed {
                url: "https://github.com/owner/project.git".to_string(),
                stderr: "killed".to_string(),
            })
        });
        assert!(matches!(result, Err(Error::Interrupted)));
    }

    #[test]
    fn test_remote_clone_of_local_repository() -> Result<()> {
        if !clone::tests::git_available() {
            eprintln!("git not available; skipping");
            return Ok(());
        }
        let origin = tempdir().unwrap();
        write_docs(origin.path())?;
        clone::tests::git(origin.path(), &["init", "-q"]);
        clone::tests::git(origin.path(), &["add", "."]);
        clone::tests::git(origin.path(), &["commit", "-q", "-m", "docs"]);
        let url = format!("file://{}", origin.path().display());

        let repo = docs_repo("owner/project/tree/main/docs/guide");
        let resolved = materialize(&repo, false, &CancellationToken::new(), |dest| {
            clone_repo(&url, None, dest)
        })?;
        let temp = resolved.temp_path().unwrap().to_path_buf();
        assert!(resolved.root.starts_with(&temp));
        assert_eq!(
            fs::read_to_string(resolved.root.join("intro.md")).unwrap(),
            "Intro\n"
        );
        assert!(!resolved.root.join("README.md").exists());

        drop(resolved);
        assert!(!temp.exists());
        Ok(())
    }
}
