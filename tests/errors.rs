mod common;

use assert_cmd::prelude::*;
use common::{create_file, llmstxt_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_source_is_usage_error() {
    llmstxt_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    llmstxt_cmd()
        .args(["--local", ".", "--bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_two_sources_rejected() {
    llmstxt_cmd()
        .args(["--local", ".", "--github", "owner/repo"])
        .assert()
        .code(1);
}

#[test]
fn test_missing_local_dir() {
    let temp = tempdir().unwrap();
    llmstxt_cmd()
        .arg("--local")
        .arg(temp.path().join("does-not-exist"))
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_invalid_max_size() {
    let temp = tempdir().unwrap();
    llmstxt_cmd()
        .arg("--local")
        .arg(temp.path())
        .args(["--max-size", "huge"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid size format"));
}

#[test]
fn test_identical_output_names_rejected() {
    let temp = tempdir().unwrap();
    llmstxt_cmd()
        .arg("--local")
        .arg(temp.path())
        .args(["--llms", "same", "--llms-full", "same"])
        .assert()
        .code(1);
}

#[test]
fn test_no_files_found_exits_zero() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    create_file(src.path(), "main.rs", "fn main() {}");

    llmstxt_cmd()
        .arg("--local")
        .arg(src.path())
        .arg("--output-dir")
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "No documentation files found matching the specified criteria.",
        ));
    assert!(!out.path().join("llms.txt").exists());
    assert!(!out.path().join("llms-full.txt").exists());
}

#[test]
fn test_malformed_github_reference() {
    llmstxt_cmd()
        .args(["--github", "not a repo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not parse GitHub repository"));
}

#[test]
fn test_github_flag_rejects_gitlab_url() {
    llmstxt_cmd()
        .args(["--github", "https://gitlab.com/group/project"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a GitHub URL"));
}

#[test]
fn test_api_requires_github() {
    llmstxt_cmd()
        .args(["--gitlab", "group/project", "--api"])
        .assert()
        .code(1);
}
