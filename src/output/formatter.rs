// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.

use pathdiff::diff_paths;
use std::path::Path;

/// Formats a file path for a block header.
///
/// The path is made relative to `base_dir` when possible, otherwise shown as
/// given. Separators are always `/`, even on Windows.
///
/// # Examples
/// ```
/// use aicodeprep::output::formatter::format_path_for_display;
/// use std::path::Path;
///
/// let base = Path::new("/work/project");
/// assert_eq!(format_path_for_display(Path::new("/work/project/src/main.rs"), base), "src/main.rs");
/// assert_eq!(format_path_for_display(Path::new("/work/other/x.py"), base), "../other/x.py");
/// ```
pub fn format_path_for_display(path: &Path, base_dir: &Path) -> String {
    let shown = diff_paths(path, base_dir).unwrap_or_else(|| path.to_path_buf());
    shown.to_string_lossy().replace('\\', "/")
}
