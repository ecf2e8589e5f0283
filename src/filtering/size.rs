// src/filtering/size.rs

use crate::config::TraversalConfig;

/// Checks if a file size is within the configured limit.
///
/// The limit is inclusive: a file of exactly `max_size` bytes passes.
#[inline]
pub fn passes_size_filter(size: u64, config: &TraversalConfig) -> bool {
    match config.max_size {
        Some(max_size) => size <= max_size,
        None => true, // No limit set
    }
}
