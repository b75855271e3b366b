//! Defines the core data structure passed from the classifier to the tree.

use std::path::PathBuf;

/// A file reported by the classifier, with its default-inclusion decision.
///
/// # Examples
///
/// ```
/// use aicodeprep::core_types::FileEntry;
/// use std::path::PathBuf;
///
/// let entry = FileEntry {
///     absolute_path: PathBuf::from("/path/to/project/src/main.rs"),
///     relative_path: PathBuf::from("src/main.rs"),
///     default_included: true,
///     is_binary: false,
///     size: 123,
/// };
///
/// assert!(entry.is_checkable());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileEntry {
    /// The absolute path to the file on the filesystem.
    pub absolute_path: PathBuf,
    /// The path relative to the scan root.
    pub relative_path: PathBuf,
    /// Whether the classifier selects this file by default. Always `false`
    /// for binary files.
    pub default_included: bool,
    /// Whether the file was detected as binary (by extension or content).
    pub is_binary: bool,
    /// File size in bytes, from metadata.
    pub size: u64,
}

impl FileEntry {
    /// Binary files can never be checked in the selection tree.
    pub fn is_checkable(&self) -> bool {
        !self.is_binary
    }
}
