// src/config/parsing.rs

use anyhow::{Context, Result};
use byte_unit::Byte;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::str::FromStr;

static JSON_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").unwrap());

/// Parses the optional max size string (e.g. "512k", "2MiB") into bytes.
pub fn parse_max_size(max_size_str: Option<String>) -> Result<Option<u64>> {
    max_size_str
        .map(|s| {
            Byte::from_str(&s)
                .map(|b| b.as_u64())
                .with_context(|| format!("Invalid size format: '{}'", s))
        })
        .transpose()
}

/// Lower-cases an extension and ensures it carries a leading dot.
///
/// Returns `None` for blank input.
///
/// # Examples
/// ```
/// use aicodeprep::config::normalize_extension;
///
/// assert_eq!(normalize_extension("RS").as_deref(), Some(".rs"));
/// assert_eq!(normalize_extension(" .Py ").as_deref(), Some(".py"));
/// assert_eq!(normalize_extension("  "), None);
/// ```
pub fn normalize_extension(ext: &str) -> Option<String> {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_lowercase()))
}

/// Returns the body of the first fenced ```` ```json ```` block holding an object.
pub(super) fn extract_json_block(content: &str) -> Option<&str> {
    JSON_BLOCK
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses a selection list: one relative path per line, blank lines and
/// `#` comments ignored, backslashes treated as separators.
pub(super) fn parse_selection_list(text: &str) -> BTreeSet<PathBuf> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| PathBuf::from(line.replace('\\', "/").trim_start_matches("./")))
        .collect()
}
