//! `aicodeprep` picks files from a project tree and concatenates them into a
//! single text blob for pasting into a large-language-model chat.
//!
//! As a library, it provides a small, synchronous pipeline:
//! 1.  **Classify**: walk the scan root once and decide, per file, whether it
//!     is included by default (extension, directory and name rules, glob
//!     patterns, a size cap and binary sniffing).
//! 2.  **Select**: build a checkbox tree over the result and adjust it with
//!     folder propagation, select all or deselect all.
//! 3.  **Process**: write every selected file into one output file (XML-ish
//!     `<code>` blocks or Markdown sections) and copy it to the clipboard.
//!
//! # Example: Library Usage
//!
//! ```
//! use aicodeprep::config::RuleConfig;
//! use aicodeprep::filtering::Rules;
//! use aicodeprep::output::OutputFormat;
//! use aicodeprep::config::OutputSettings;
//! use aicodeprep::Session;
//! use std::fs;
//! use std::path::PathBuf;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempdir()?;
//! fs::create_dir(temp.path().join("src"))?;
//! fs::write(temp.path().join("src/main.rs"), "fn main() {}")?;
//! fs::write(temp.path().join("notes.txt"), "todo")?;
//!
//! // Classify and build the tree.
//! let rules = Rules::new(&RuleConfig::default());
//! let mut session = Session::open(temp.path(), rules, None)?;
//! assert_eq!(session.tree().selected_relative_paths(), vec![PathBuf::from("src/main.rs")]);
//!
//! // Adjust the selection, then write the output.
//! session.check("notes.txt")?;
//! let outcome = session.process(&OutputSettings {
//!     file: PathBuf::from("fullcode.txt"),
//!     base_dir: temp.path().to_path_buf(),
//!     format: OutputFormat::Markdown,
//!     prompt: None,
//!     copy_to_clipboard: false,
//! });
//! assert_eq!(outcome.files_processed, 2);
//!
//! let text = fs::read_to_string(temp.path().join("fullcode.txt"))?;
//! assert!(text.contains("### src/main.rs\nfn main() {}\n### END src/main.rs\n"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod session;
pub mod tree;

pub use config::{Config, RuleConfig};
pub use core_types::FileEntry;
pub use discovery::classify;
pub use session::{ProcessOutcome, Session};
pub use tree::SelectionTree;

use crate::errors::Result;
use crate::filtering::Rules;
use std::io::Write;

/// What a [`run`] call did.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The tree and selection were printed; nothing was written.
    DryRun { selected: usize },
    Processed(ProcessOutcome),
}

/// Opens a session for `config`: classify the root and build the tree,
/// honoring any selection override.
pub fn open_session(config: &Config) -> Result<Session> {
    let rules = Rules::new(&config.rules);
    Session::open(&config.root, rules, config.selection_override.as_ref())
}

/// Executes the whole pipeline for a resolved `Config`.
///
/// Header paths and a relative output file resolve against
/// `config.output.base_dir`.
///
/// Tree actions are applied in order (select/deselect all, checks, unchecks).
/// A dry run prints the tree and selection to `dry_run_writer`; otherwise the
/// selection is processed.
///
/// # Errors
/// Returns an error if the root cannot be scanned, an action names an unknown
/// path, or the dry-run listing cannot be written. Output write failures are
/// reported inside [`ProcessOutcome`], not as errors.
pub fn run(config: &Config, dry_run_writer: &mut dyn Write) -> Result<RunOutcome> {
    let mut session = open_session(config)?;
    session.apply(&config.actions)?;

    if config.dry_run {
        let base_dir = &config.output.base_dir;
        output::dry_run::write_dry_run_output(dry_run_writer, session.tree(), base_dir)
            .map_err(|e| errors::io_error_with_path(e, "<stdout>"))?;
        return Ok(RunOutcome::DryRun {
            selected: session.tree().selected_files().len(),
        });
    }

    Ok(RunOutcome::Processed(session.process(&config.output)))
}
