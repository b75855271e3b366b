use super::OutputFormat;
use crate::constants::{BINARY_PLACEHOLDER, READ_ERROR_PLACEHOLDER};
use crate::filtering::is_binary_file;
use log::{debug, warn};
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// What goes between a block's header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    Text(String),
    Binary,
    ReadError,
}

impl BlockContent {
    /// Reads a file for output. Binary files (re-checked at write time) and
    /// unreadable files become placeholders instead of failing the run.
    pub fn load(path: &Path) -> Self {
        match is_binary_file(path) {
            Ok(true) => {
                debug!("Binary file, writing placeholder: {}", path.display());
                return BlockContent::Binary;
            }
            Ok(false) => {}
            Err(e) => {
                warn!("Could not read '{}': {}", path.display(), e);
                return BlockContent::ReadError;
            }
        }
        match fs::read(path) {
            Ok(bytes) => BlockContent::Text(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                warn!("Could not read '{}': {}", path.display(), e);
                BlockContent::ReadError
            }
        }
    }

    fn body(&self, format: OutputFormat) -> Cow<'_, str> {
        let placeholder = match self {
            BlockContent::Text(text) => return Cow::Borrowed(text),
            BlockContent::Binary => BINARY_PLACEHOLDER,
            BlockContent::ReadError => READ_ERROR_PLACEHOLDER,
        };
        match format {
            OutputFormat::Xml => Cow::Borrowed(placeholder),
            OutputFormat::Markdown => Cow::Owned(format!("{}\n", placeholder)),
        }
    }
}

/// Writes a single file's header, content and footer.
///
/// Xml: `path:\n<code>\n...\n</code>\n\n`.
/// Markdown: `### path\n...\n### END path\n\n`.
pub fn write_file_block(
    writer: &mut dyn Write,
    header_path: &str,
    content: &BlockContent,
    format: OutputFormat,
) -> io::Result<()> {
    let body = content.body(format);
    match format {
        OutputFormat::Xml => {
            write!(writer, "{}:\n<code>\n{}\n</code>\n\n", header_path, body)
        }
        OutputFormat::Markdown => {
            write!(
                writer,
                "### {}\n{}\n### END {}\n\n",
                header_path, body, header_path
            )
        }
    }
}
