// src/output/dry_run.rs

use crate::output::formatter::format_path_for_display;
use crate::tree::SelectionTree;
use log::debug;
use std::io::{self, Write};
use std::path::Path;

/// Writes the output for a dry run (-D).
///
/// Prints the rendered selection tree, then the header path of every file
/// that would be processed, in processing order.
pub fn write_dry_run_output(
    writer: &mut dyn Write,
    tree: &SelectionTree,
    base_dir: &Path,
) -> io::Result<()> {
    debug!("Executing dry run output...");
    writeln!(writer, "--- Dry Run: Selection tree ---")?;
    write!(writer, "{}", tree.render())?;
    writeln!(writer, "--- Files that would be processed ---")?;

    for path in tree.selected_files() {
        writeln!(writer, "- {}", format_path_for_display(&path, base_dir))?;
    }

    writeln!(writer, "--- End Dry Run ---")?;
    writer.flush()
}
