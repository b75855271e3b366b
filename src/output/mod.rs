// src/output/mod.rs

//! Concatenation of the selected files into a single prompt-ready text.

use crate::constants::TRAILING_NOTE;
use crate::errors::Result;
use log::{debug, info};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod dry_run;
pub mod file_block;
pub mod formatter;
pub mod writer;

use file_block::{write_file_block, BlockContent};
use formatter::format_path_for_display;
pub use writer::ClipboardStatus;

/// Block layout for each file in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `path:` followed by a `<code>...</code>` block.
    #[default]
    Xml,
    /// `### path` ... `### END path`.
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Xml => write!(f, "xml"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Options for rendering the concatenated text.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Header paths are shown relative to this directory.
    pub base_dir: PathBuf,
    /// Appended after all file blocks when non-empty.
    pub prompt: Option<String>,
}

/// Outcome of a successful [`process_files`] call.
#[derive(Debug, Clone)]
pub struct ProcessReport {
    pub files_processed: usize,
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub clipboard: ClipboardStatus,
}

/// Renders every file block, the optional prompt and the trailing note.
///
/// # Examples
///
/// ```
/// use aicodeprep::output::{render_output, OutputFormat, OutputOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> std::io::Result<()> {
/// let temp = tempdir()?;
/// let file = temp.path().join("a.py");
/// fs::write(&file, "print('hi')")?;
///
/// let opts = OutputOptions {
///     format: OutputFormat::Xml,
///     base_dir: temp.path().to_path_buf(),
///     prompt: Some("Explain this.".to_string()),
/// };
/// let text = render_output(&[file], &opts)?;
/// assert!(text.starts_with("a.py:\n<code>\nprint('hi')\n</code>\n\n"));
/// assert!(text.ends_with("\n\nExplain this.\n\n.. some other files were skipped ..\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_output(files: &[PathBuf], opts: &OutputOptions) -> std::io::Result<String> {
    let mut buffer: Vec<u8> = Vec::new();
    for path in files {
        let header = format_path_for_display(path, &opts.base_dir);
        let content = BlockContent::load(path);
        write_file_block(&mut buffer, &header, &content, opts.format)?;
        debug!("Processed: {}", header);
    }

    if let Some(prompt) = opts.prompt.as_deref().map(str::trim) {
        if !prompt.is_empty() {
            write!(buffer, "\n\n{}", prompt)?;
        }
    }
    buffer.write_all(TRAILING_NOTE.as_bytes())?;

    // Every block is either valid UTF-8 text (lossy-decoded) or ASCII.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Renders the selection, writes it to `output_path` and optionally copies it
/// to the clipboard.
///
/// A relative `output_path` resolves against `opts.base_dir`. Failing to
/// write the output file aborts the run; a clipboard failure only shows up
/// in the report.
///
/// # Errors
/// Returns `Error::Io` if the output file cannot be written.
pub fn process_files(
    files: &[PathBuf],
    output_path: &Path,
    opts: &OutputOptions,
    copy_to_clipboard: bool,
) -> Result<ProcessReport> {
    let output_path = if output_path.is_absolute() {
        output_path.to_path_buf()
    } else {
        opts.base_dir.join(output_path)
    };
    info!("Writing output to: {}", output_path.display());

    let text = render_output(files, opts)
        .map_err(|e| crate::errors::io_error_with_path(e, &output_path))?;
    writer::write_output_file(&output_path, &text)?;

    let clipboard = if copy_to_clipboard {
        writer::copy_with_status(&text)
    } else {
        ClipboardStatus::Skipped
    };

    Ok(ProcessReport {
        files_processed: files.len(),
        output_path,
        bytes_written: text.len(),
        clipboard,
    })
}
