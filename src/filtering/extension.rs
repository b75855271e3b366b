// src/filtering/extension.rs

use std::path::Path;

/// Returns the lower-cased, dot-prefixed extension of a path.
///
/// Only the last extension counts, so `notes.md.bak` yields `.bak`. Names
/// like `Makefile` or `.bashrc` have no extension.
///
/// # Examples
///
/// ```
/// use aicodeprep::filtering::file_extension;
/// use std::path::Path;
///
/// assert_eq!(file_extension(Path::new("src/Main.RS")).as_deref(), Some(".rs"));
/// assert_eq!(file_extension(Path::new("notes.md.bak")).as_deref(), Some(".bak"));
/// assert_eq!(file_extension(Path::new("Makefile")), None);
/// ```
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|os_str| os_str.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}
