// src/config/parsing.rs

use crate::constants::BYTES_PER_MB;
use crate::errors::{Error, Result};
use byte_unit::Byte;
use std::str::FromStr;

/// Parses a `--max-size` value into bytes.
///
/// A plain number is a count of megabytes (MiB) and may be fractional
/// (`"0.5"`). Anything else is handed to `byte-unit`, so `"512KiB"`, `"2MB"` or
/// `"1500 B"` work too.
///
/// ```
/// use llmstxt::config::parse_max_size;
///
/// assert_eq!(parse_max_size("1").unwrap(), 1024 * 1024);
/// assert_eq!(parse_max_size("512KiB").unwrap(), 512 * 1024);
/// assert!(parse_max_size("lots").is_err());
/// ```
pub fn parse_max_size(value: &str) -> Result<u64> {
    let trimmed = value.trim();
    if let Ok(mb) = trimmed.parse::<f64>() {
        if !mb.is_finite() || mb < 0.0 {
            return Err(Error::InvalidInput(format!(
                "Invalid size format: '{}' (must be a non-negative number of MB)",
                value
            )));
        }
        return Ok((mb * BYTES_PER_MB).floor() as u64);
    }
    Byte::from_str(trimmed)
        .map(|b| b.as_u64())
        .map_err(|e| Error::InvalidInput(format!("Invalid size format: '{}': {}", value, e)))
}

/// Splits list arguments given as repeated values, comma-separated or
/// whitespace-separated lists into individual non-empty items, keeping order.
///
/// ```
/// use llmstxt::config::split_list;
///
/// let raw = vec!["docs, build".to_string(), "tmp out".to_string()];
/// assert_eq!(split_list(&raw), vec!["docs", "build", "tmp", "out"]);
/// ```
pub fn split_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.split(|c: char| c == ',' || c.is_whitespace()))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes an extension to lowercase with one leading dot removed.
///
/// ```
/// use llmstxt::config::normalize_extension;
///
/// assert_eq!(normalize_extension(".TXT"), "txt");
/// assert_eq!(normalize_extension("rst"), "rst");
/// ```
pub fn normalize_extension(ext: &str) -> String {
    let lower = ext.trim().to_lowercase();
    lower.strip_prefix('.').map(str::to_string).unwrap_or(lower)
}
