// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn llmstxt_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("llmstxt"))
}

/// Creates a file (and its parent directories) below `root`.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative_path: &str, content: &str) {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Reads a file as UTF-8, panicking with the path on failure.
#[allow(dead_code)]
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e))
}
