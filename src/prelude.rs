//! The `aicodeprep` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use aicodeprep::prelude::*;
//! # fn main() -> Result<()> {
//! let rules = Rules::new(&RuleConfig::default());
//! let session = Session::open(std::path::Path::new("."), rules, None)?;
//! let _files = session.tree().selected_files();
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, OutputSettings, RuleConfig, SelectionActions};
pub use crate::core_types::FileEntry;
pub use crate::discovery::classify;
pub use crate::errors::{Error, Result};
pub use crate::filtering::{is_binary_file, Rules};
pub use crate::output::{process_files, render_output, OutputFormat, OutputOptions};
pub use crate::session::{ProcessOutcome, Session};
pub use crate::tree::{CheckState, NodeId, SelectionTree};
pub use crate::{open_session, run, RunOutcome};
