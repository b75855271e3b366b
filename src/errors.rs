//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can surface from the classifier, the selection tree and the output writer,
//! offering more context than generic I/O or `anyhow` errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while copying to the system clipboard.
///
/// `arboard::Error` is flattened into a message so this type stays available
/// when the `clipboard` feature is disabled.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The clipboard backend could not be opened.
    #[error("Failed to initialize clipboard: {0}")]
    Initialization(String),
    /// The clipboard was opened but refused the text.
    #[error("Failed to set clipboard content: {0}")]
    SetContent(String),
    /// The binary was built without the `clipboard` feature.
    #[error("Clipboard support is not compiled in")]
    Unsupported,
}

/// Application-specific errors used throughout `aicodeprep`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The scan root does not exist or is not a directory.
    #[error("Not a directory: '{}'", .0.display())]
    InvalidRoot(PathBuf),

    // --- Configuration Errors ---
    /// Invalid configuration values or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    // --- Clipboard Errors ---
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    // --- Selection Errors ---
    /// A relative path handed to the selection tree has no matching node.
    #[error("No such entry in the selection tree: '{0}'")]
    UnknownPath(String),

    /// Processing was requested but no file in the tree is checked.
    #[error("No files selected.")]
    NoFilesSelected,
}

/// Convenience alias used by the library API.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
