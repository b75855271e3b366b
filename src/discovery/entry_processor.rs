// src/discovery/entry_processor.rs

use crate::constants::LEGACY_OUTPUT_MARKER;
use crate::core_types::FileEntry;
use crate::filtering::{file_name_str, is_binary_file, passes_size_filter, Rules};
use ignore::DirEntry;
use log::{debug, trace, warn};
use std::fs;
use std::path::{Component, Path};

/// Processes a single directory entry from the walk.
///
/// Returns `Some(FileEntry)` for every regular file that survives the walk
/// rules (legacy marker, size cap, readable head), carrying its
/// default-inclusion decision. Returns `None` for directories, filtered files
/// and any entry whose metadata or content cannot be read.
pub(crate) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    root: &Path,
    rules: &Rules,
) -> Option<FileEntry> {
    // --- 1. Handle Walker Errors ---
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return None;
        }
    };

    let absolute_path = entry.path().to_path_buf();
    trace!("Processing entry: {}", absolute_path.display());

    // --- 2. Get Metadata (follows file symlinks) ---
    let metadata = match fs::metadata(&absolute_path) {
        Ok(md) => md,
        Err(e) => {
            warn!(
                "Skipping entry '{}' due to metadata error: {}",
                absolute_path.display(),
                e
            );
            return None;
        }
    };

    // --- 3. Filter by File Type ---
    if !metadata.is_file() {
        trace!("Skipping non-file entry: {}", absolute_path.display());
        return None;
    }

    // --- 4. Skip the legacy output marker ---
    let file_name = file_name_str(&absolute_path);
    if file_name == LEGACY_OUTPUT_MARKER {
        debug!("Skipping legacy output file: {}", absolute_path.display());
        return None;
    }

    // --- 5. Filter by Size ---
    if !passes_size_filter(&metadata, rules.max_file_size()) {
        debug!(
            "Skipping file due to size cap: {} (Size: {} bytes)",
            absolute_path.display(),
            metadata.len()
        );
        return None;
    }

    // --- 6. Calculate Relative Path ---
    let relative_path = match absolute_path.strip_prefix(root) {
        Ok(p) => p.to_path_buf(),
        Err(err) => {
            warn!(
                "Failed to strip prefix '{}' from '{}': {}. Skipping.",
                root.display(),
                absolute_path.display(),
                err
            );
            return None;
        }
    };

    // --- 7. Sniff for binary content ---
    let is_binary = match is_binary_file(&absolute_path) {
        Ok(b) => b,
        Err(e) => {
            warn!(
                "Skipping file '{}' due to read error: {}",
                absolute_path.display(),
                e
            );
            return None;
        }
    };

    // --- 8. Decide default inclusion ---
    let default_included =
        !is_binary && decide_inclusion(&absolute_path, &relative_path, &file_name, rules);

    debug!(
        "Classified {}: included={}, binary={}",
        relative_path.display(),
        default_included,
        is_binary
    );
    Some(FileEntry {
        absolute_path,
        relative_path,
        default_included,
        is_binary,
        size: metadata.len(),
    })
}

/// Applies the inclusion precedence, first match wins:
/// include file name, then include-dir parent, then the general rule with
/// ancestor directory checks.
pub(crate) fn decide_inclusion(
    absolute_path: &Path,
    relative_path: &Path,
    file_name: &str,
    rules: &Rules,
) -> bool {
    if rules.is_include_file_name(file_name) {
        trace!("'{}' is an include file", file_name);
        return true;
    }

    let parent_name = absolute_path
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy());
    if parent_name.is_some_and(|name| rules.is_include_dir_name(&name)) {
        return rules.passes_file_rules(relative_path);
    }

    rules.passes_file_rules(relative_path) && !has_excluded_ancestor(relative_path, rules)
}

fn has_excluded_ancestor(relative_path: &Path, rules: &Rules) -> bool {
    relative_path
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| match c {
            Component::Normal(seg) => Some(seg.to_string_lossy()),
            _ => None,
        })
        .any(|seg| rules.is_excluded_dir_name(&seg))
}
