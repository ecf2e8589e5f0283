// src/source/clone.rs
//! Shallow-clones remote repositories with the system `git` binary.

use crate::errors::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Clones `url` into `dest` with depth 1, checking out only `branch` (or the
/// remote's default branch).
///
/// Interactive credential prompts are disabled, so a private or missing
/// repository fails fast instead of hanging on a terminal prompt.
///
/// # Errors
/// Returns `Error::CloneFailed` carrying git's stderr if the clone exits
/// unsuccessfully, or the launch error if `git` cannot be started.
pub fn clone_repo(url: &str, branch: Option<&str>, dest: &Path) -> Result<()> {
    let mut cmd = Command::new("git");
    cmd.args(["clone", "--depth", "1", "--single-branch"]);
    if let Some(branch) = branch {
        cmd.arg("--branch").arg(branch);
    }
    cmd.arg("--")
        .arg(url)
        .arg(dest)
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    debug!("Running: {:?}", cmd);
    let output = cmd.output().map_err(|e| Error::CloneFailed {
        url: url.to_string(),
        stderr: format!("failed to launch git: {}", e),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::CloneFailed {
            url: url.to_string(),
            stderr: if stderr.is_empty() {
                format!("git exited with {}", output.status)
            } else {
                stderr
            },
        });
    }
    Ok(())
}
