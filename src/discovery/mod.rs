//! Walks a scan root once and classifies every reported file.
use crate::core_types::FileEntry;
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::Rules;
use log::{debug, info};
use std::path::Path;
use tracing::instrument;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Classifies every file under `root` as included by default or not.
///
/// The walk is single-threaded, depth-first and sorted by file name, so the
/// result is stable for an unchanged filesystem. Hidden entries, excluded
/// directories, the legacy output marker and oversized files are not
/// reported. A file whose metadata or head cannot be read is skipped; the
/// walk carries on.
///
/// # Errors
/// Returns an error only if `root` is not a readable directory.
///
/// # Examples
///
/// ```
/// use aicodeprep::config::RuleConfig;
/// use aicodeprep::discovery::classify;
/// use aicodeprep::filtering::Rules;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join("a.py"), "print('hi')")?;
/// fs::write(temp.path().join("b.txt"), "notes")?;
///
/// let rules = Rules::new(&RuleConfig::default());
/// let entries = classify(temp.path(), &rules)?;
///
/// assert_eq!(entries.len(), 2);
/// assert!(entries[0].default_included); // a.py
/// assert!(!entries[1].default_included); // b.txt
/// # Ok(())
/// # }
/// ```
#[instrument(level = "debug", skip(rules), fields(root = %root.display()))]
pub fn classify(root: &Path, rules: &Rules) -> Result<Vec<FileEntry>> {
    let metadata = std::fs::metadata(root).map_err(|e| io_error_with_path(e, root))?;
    if !metadata.is_dir() {
        return Err(Error::InvalidRoot(root.to_path_buf()));
    }

    let entries: Vec<FileEntry> = build_walker(root, rules)
        .filter_map(|entry_result| process_direntry(entry_result, root, rules))
        .collect();

    let included = entries.iter().filter(|e| e.default_included).count();
    info!(
        "Scanned {}: {} files, {} included by default",
        root.display(),
        entries.len(),
        included
    );
    debug!(
        "Binary files: {}",
        entries.iter().filter(|e| e.is_binary).count()
    );
    Ok(entries)
}
