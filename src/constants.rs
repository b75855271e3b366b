// src/constants.rs

/// Legacy output file name. Never reported by the classifier.
pub const LEGACY_OUTPUT_MARKER: &str = "aicp_FULLCODE.txt";

/// Default output file name, resolved against the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "fullcode.txt";

/// Name of the user rule file looked up next to the executable and in the
/// platform config directory.
pub const CONFIG_FILE_NAME: &str = "aicodeprep_config.md";

/// Substring that marks a directory as a virtual environment.
pub const VENV_MARKER: &str = "venv";

/// Placeholder written instead of the contents of a binary file.
pub const BINARY_PLACEHOLDER: &str = ".. contents skipped (binary file) ..";

/// Placeholder written when a selected file cannot be read.
pub const READ_ERROR_PLACEHOLDER: &str = ".. contents skipped (read error) ..";

/// Fixed note appended after all file blocks and the prompt.
pub const TRAILING_NOTE: &str = "\n\n.. some other files were skipped ..\n";
