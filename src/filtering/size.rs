// src/filtering/size.rs

use std::fs::Metadata;

/// Checks if the file's size is within the configured limit (inclusive).
#[inline]
pub(crate) fn passes_size_filter(metadata: &Metadata, max_file_size: u64) -> bool {
    metadata.len() <= max_file_size
}
