// src/constants.rs

/// File-name suffixes recognized as documentation (compared lowercase).
pub const DOC_EXTENSIONS: &[&str] = &[".md", ".mdx", ".markdown", ".txt", ".rst", ".adoc"];

/// Directory names never descended into, in addition to hidden (`.`-prefixed)
/// directories and the user's `--skip` list.
pub const BUILTIN_IGNORED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "__pycache__",
    "venv",
    "env",
    "site-packages",
    "target",
    "build",
    "dist",
    "vendor",
];

/// Default base name of the link index.
pub const DEFAULT_LLMS_BASENAME: &str = "llms";

/// Default base name of the full-content dump.
pub const DEFAULT_LLMS_FULL_BASENAME: &str = "llms-full";

/// Suffix appended to the full file name of a backed-up output.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Prefix of temporary clone/download directories.
pub const TEMP_DIR_PREFIX: &str = "llmstxt-";

/// Separator line framing the preview and summary sections.
pub const SECTION_SEPARATOR: &str = "---";

/// Bytes per megabyte for plain-number `--max-size` values.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
