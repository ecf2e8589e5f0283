// src/source/api.rs
//! Downloads matching documentation files through the GitHub contents API.

use super::url::RemoteRepo;
use crate::cancellation::CancellationToken;
use crate::config::TraversalConfig;
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::{is_skipped_dir, passes_extension_filters, passes_size_filter};
use crate::progress::ProgressReporter;
use rayon::prelude::*;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::{Component, Path};
use std::sync::atomic::{AtomicU64, Ordering};
use url::Url;

const GITHUB_API_BASE: &str = "https://api.github.com/";

/// A file or directory item from the GitHub Contents API.
#[derive(Deserialize, Debug, Clone)]
struct ContentItem {
    name: String,
    path: String,
    #[serde(rename = "type")]
    item_type: String,
    #[serde(default)]
    size: u64,
    download_url: Option<String>,
}

/// One response of the contents endpoint.
#[derive(Debug)]
enum Listing {
    Directory(Vec<ContentItem>),
    File(ContentItem),
}

/// Repository metadata, only used to find the default branch.
#[derive(Deserialize, Debug)]
struct RepoInfo {
    default_branch: String,
}

/// Downloads every file of `repo` (below its sub-path, if any) that passes
/// the walk filters into `dest`, keeping repository-relative paths.
///
/// Directories the walk would skip are never listed, so ignored subtrees such
/// as `node_modules` cost no requests. `GITHUB_TOKEN`, when set, is sent as a
/// bearer token.
///
/// # Errors
/// Returns `Error::Network` for failed requests or non-success statuses,
/// `Error::Io` if a file cannot be written, and `Error::Interrupted` when
/// cancelled.
pub fn download_via_api(
    repo: &RemoteRepo,
    branch: Option<&str>,
    traversal: &TraversalConfig,
    dest: &Path,
    token: &CancellationToken,
    progress: &dyn ProgressReporter,
) -> Result<()> {
    let client = build_client()?;

    let branch = match branch {
        Some(branch) => branch.to_string(),
        None => {
            log::debug!("Fetching default branch for {}/{}", repo.owner, repo.repo);
            fetch_default_branch(&client, repo)?
        }
    };
    log::info!("Downloading {}/{} at '{}' via the GitHub API", repo.owner, repo.repo, branch);

    progress.set_message("Listing repository...".to_string());
    let subpath = repo.subpath.clone().unwrap_or_default();
    let files = list_matching_files(&client, repo, &branch, &subpath, traversal, token)?;

    let start_dir = dest.join(&subpath);
    fs::create_dir_all(&start_dir).map_err(|e| io_error_with_path(e, &start_dir))?;

    progress.set_length(files.len() as u64);
    progress.set_message("Downloading...".to_string());
    let done = AtomicU64::new(0);
    files
        .par_iter()
        .map(|item| {
            if token.is_cancelled() {
                return Err(Error::Interrupted);
            }
            download_file(&client, item, dest)?;
            progress.set_position(done.fetch_add(1, Ordering::Relaxed) + 1);
            Ok(())
        })
        .collect::<Result<()>>()?;
    progress.finish_with_message(format!("Downloaded {} files", files.len()));
    Ok(())
}

/// Builds a client with the headers GitHub expects.
fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("llmstxt/", env!("CARGO_PKG_VERSION"))),
    );

    if let Ok(gh_token) = env::var("GITHUB_TOKEN") {
        let value = HeaderValue::from_str(&format!("Bearer {}", gh_token.trim()))
            .map_err(|_| Error::InvalidInput("GITHUB_TOKEN contains invalid characters".to_string()))?;
        headers.insert(AUTHORIZATION, value);
        log::debug!("Using GITHUB_TOKEN for authentication.");
    }

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| Error::Network(e.to_string()))
}

fn api_url(path: &str) -> Result<Url> {
    Url::parse(GITHUB_API_BASE)
        .and_then(|base| base.join(path))
        .map_err(|e| Error::InvalidInput(format!("Invalid API path '{}': {}", path, e)))
}

/// Sends a GET request and turns transport failures and non-success statuses
/// into `Error::Network`.
fn get(client: &Client, url: &str) -> Result<Response> {
    log::debug!("GET {}", url);
    let response = client
        .get(url)
        .send()
        .map_err(|e| Error::Network(format!("GET {} failed: {}", url, e)))?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Network(format!("GET {} returned {}", url, status)));
    }
    Ok(response)
}

fn fetch_default_branch(client: &Client, repo: &RemoteRepo) -> Result<String> {
    let url = api_url(&format!("repos/{}/{}", repo.owner, repo.repo))?;
    let info: RepoInfo = get(client, url.as_str())?
        .json()
        .map_err(|e| Error::Network(format!("Unexpected repository metadata: {}", e)))?;
    Ok(info.default_branch)
}

/// Lists the tree breadth-first, keeping files that pass the walk filters.
fn list_matching_files(
    client: &Client,
    repo: &RemoteRepo,
    branch: &str,
    subpath: &str,
    traversal: &TraversalConfig,
    token: &CancellationToken,
) -> Result<Vec<ContentItem>> {
    let mut files = Vec::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(subpath.to_string());

    while let Some(path) = queue.pop_front() {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        let mut url = api_url(&format!("repos/{}/{}/contents/{}", repo.owner, repo.repo, path))?;
        url.query_pairs_mut().append_pair("ref", branch);

        let body = get(client, url.as_str())?
            .text()
            .map_err(|e| Error::Network(e.to_string()))?;
        for item in directory_items(parse_listing(&body)?, repo, &path)? {
            match item.item_type.as_str() {
                "dir" if is_skipped_dir(&item.name, traversal) => {
                    log::debug!("Skipping remote directory: {}", item.path);
                }
                "dir" => queue.push_back(item.path),
                "file" if is_wanted_file(&item, traversal) => files.push(item),
                _ => {}
            }
        }
    }
    Ok(files)
}

/// The API returns an array for a directory and a single object for a file.
fn parse_listing(body: &str) -> Result<Listing> {
    let invalid = |e: serde_json::Error| Error::Network(format!("Unexpected API response: {}", e));
    let value: Value = serde_json::from_str(body).map_err(invalid)?;
    if value.is_array() {
        serde_json::from_value(value).map(Listing::Directory).map_err(invalid)
    } else if value.is_object() {
        serde_json::from_value(value).map(Listing::File).map_err(invalid)
    } else {
        Ok(Listing::Directory(Vec::new()))
    }
}

/// Only directories can be walked; a sub-path naming a file is rejected.
fn directory_items(listing: Listing, repo: &RemoteRepo, path: &str) -> Result<Vec<ContentItem>> {
    match listing {
        Listing::Directory(items) => Ok(items),
        Listing::File(_) => Err(Error::InvalidInput(format!(
            "Path '{}' in {}/{} is a file, not a directory",
            path, repo.owner, repo.repo
        ))),
    }
}

fn is_wanted_file(item: &ContentItem, traversal: &TraversalConfig) -> bool {
    if item.download_url.is_none() {
        log::warn!("Skipping file with no download_url: {}", item.path);
        return false;
    }
    if !is_safe_relative(&item.path) {
        log::warn!("Skipping file with unsafe path: {}", item.path);
        return false;
    }
    passes_extension_filters(Path::new(&item.path), traversal)
        && passes_size_filter(item.size, traversal)
}

/// Only plain relative components are accepted, so downloads stay inside the
/// destination directory.
fn is_safe_relative(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

fn download_file(client: &Client, item: &ContentItem, dest: &Path) -> Result<()> {
    let Some(download_url) = item.download_url.as_deref() else {
        return Ok(());
    };
    let content = get(client, download_url)?
        .bytes()
        .map_err(|e| Error::Network(format!("GET {} failed: {}", download_url, e)))?;

    let local_path = dest.join(&item.path);
    if let Some(parent) = local_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
    }
    fs::write(&local_path, &content).map_err(|e| io_error_with_path(e, &local_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::url::{parse_remote, Host};

    fn item(name: &str, path: &str, size: u64) -> ContentItem {
        ContentItem {
            name: name.to_string(),
            path: path.to_string(),
            item_type: "file".to_string(),
            size,
            download_url: Some(format!("https://raw.example/{}", path)),
        }
    }

    #[test]
    fn test_parse_listing_array_and_object() -> Result<()> {
        let array = r#"[
            {"name": "docs", "path": "docs", "type": "dir", "size": 0, "download_url": null},
            {"name": "README.md", "path": "README.md", "type": "file", "size": 12, "download_url": "https://raw.example/README.md"}
        ]"#;
        let Listing::Directory(items) = parse_listing(array)? else {
            panic!("expected a directory listing");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_type, "dir");
        assert_eq!(items[1].size, 12);

        let object = r#"{"name": "a.md", "path": "a.md", "type": "file", "size": 3, "download_url": "https://raw.example/a.md"}"#;
        assert!(matches!(parse_listing(object)?, Listing::File(item) if item.size == 3));
        Ok(())
    }

    #[test]
    fn test_file_subpath_is_invalid_input() -> Result<()> {
        let repo = parse_remote(Host::GitHub, "owner/repo/tree/main/docs/README.md")?;
        let object = r#"{"name": "README.md", "path": "docs/README.md", "type": "file", "size": 3, "download_url": "https://raw.example/README.md"}"#;
        let result = directory_items(parse_listing(object)?, &repo, "docs/README.md");
        assert!(
            matches!(result, Err(Error::InvalidInput(ref msg)) if msg.contains("is a file")),
            "{:?}",
            result
        );

        let array = r#"[{"name": "a.md", "path": "docs/a.md", "type": "file", "size": 1, "download_url": null}]"#;
        assert_eq!(directory_items(parse_listing(array)?, &repo, "docs")?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_parse_listing_rejects_garbage() {
        assert!(matches!(parse_listing("not json"), Err(Error::Network(_))));
    }

    #[test]
    fn test_wanted_file_applies_walk_filters() {
        let mut traversal = TraversalConfig {
            max_size: Some(10),
            ..Default::default()
        };
        assert!(is_wanted_file(&item("a.md", "docs/a.md", 10), &traversal));
        assert!(!is_wanted_file(&item("a.md", "docs/a.md", 11), &traversal));
        assert!(!is_wanted_file(&item("logo.png", "logo.png", 1), &traversal));

        traversal.exclude_extensions.insert("md".to_string());
        assert!(!is_wanted_file(&item("a.md", "a.md", 1), &traversal));
    }

    #[test]
    fn test_unsafe_paths_rejected() {
        assert!(is_safe_relative("docs/a.md"));
        assert!(!is_safe_relative("../escape.md"));
        assert!(!is_safe_relative("/etc/passwd.txt"));
        assert!(!is_safe_relative(""));
    }
}
