// src/output/writer.rs

//! Writes the concatenated text to disk and, optionally, to the clipboard.

use crate::errors::{io_error_with_path, ClipboardError, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// What happened with the clipboard after the output file was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardStatus {
    Copied,
    /// Copy was not requested.
    Skipped,
    /// Copy was requested but failed. The output file is still valid.
    Failed(String),
}

/// Writes `content` to `path`, replacing any existing file.
///
/// # Errors
/// Returns `Error::Io` with the path attached if the file cannot be created
/// or written.
pub fn write_output_file(path: &Path, content: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| io_error_with_path(e, path))?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Copies `content` to the clipboard, logging instead of failing.
pub fn copy_with_status(content: &str) -> ClipboardStatus {
    match copy_to_clipboard(content) {
        Ok(()) => {
            info!("Output copied to clipboard.");
            ClipboardStatus::Copied
        }
        Err(e) => {
            warn!("{}", e);
            ClipboardStatus::Failed(e.to_string())
        }
    }
}

#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(content: &str) -> std::result::Result<(), ClipboardError> {
    use arboard::Clipboard;
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::Initialization(e.to_string()))?;
    clipboard
        .set_text(content)
        .map_err(|e| ClipboardError::SetContent(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_content: &str) -> std::result::Result<(), ClipboardError> {
    Err(ClipboardError::Unsupported)
}
