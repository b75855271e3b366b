// src/cli.rs

use crate::output::OutputFormat;
use clap::Parser;

/// Pick files from a project tree and concatenate them for an LLM chat.
///
/// aicodeprep walks the directory once, decides which files look like source
/// code using its rule table, lets you adjust that selection, then writes every
/// selected file into a single text file and copies it to the clipboard.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan.
    #[arg(default_value = ".")]
    pub directory: String,

    // --- Output Options ---
    /// Output file name, resolved against the working directory.
    #[arg(short = 'o', long, value_name = "FILE", default_value = crate::constants::DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Do not copy the output to the clipboard.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    pub no_copy: bool,

    /// Block layout used for each file.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Xml)]
    pub format: OutputFormat,

    /// Text appended after all file blocks (e.g. the question to ask).
    #[arg(short = 'P', long, value_name = "TEXT")]
    pub prompt: Option<String>,

    // --- Rule Options ---
    /// Rule file (Markdown with a ```json block, or plain JSON).
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,

    /// Override the maximum file size (e.g., "1M", "512k").
    #[arg(short = 'm', long, value_name = "BYTES")]
    pub max_size: Option<String>,

    // --- Selection Options ---
    /// File of relative paths (one per line) that replaces the default selection.
    #[arg(short = 's', long, value_name = "FILE")]
    pub selection: Option<String>,

    /// Check every file that can be checked.
    #[arg(short = 'A', long, action = clap::ArgAction::SetTrue, conflicts_with = "deselect_all")]
    pub select_all: bool,

    /// Uncheck everything.
    #[arg(short = 'N', long, action = clap::ArgAction::SetTrue)]
    pub deselect_all: bool,

    /// Check these relative paths. Directories check their eligible children.
    #[arg(long, value_name = "PATH", num_args = 1..)]
    pub check: Vec<String>,

    /// Uncheck these relative paths. Directories uncheck their children.
    #[arg(long, value_name = "PATH", num_args = 1..)]
    pub uncheck: Vec<String>,

    // --- Execution Control ---
    /// Print the selection tree and the files that would be processed. Writes nothing.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Enable debug logging.
    #[arg(short = 'd', long, action = clap::ArgAction::SetTrue)]
    pub debug: bool,
}
