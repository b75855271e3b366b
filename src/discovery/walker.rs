use crate::filtering::Rules;
use ignore::{DirEntry, WalkBuilder};
use log::{debug, trace};
use std::path::Path;

/// Configures and builds the `ignore::Walk` for a scan root.
///
/// VCS ignore files are not consulted; pruning follows the rule table only.
/// Entries are sorted by file name so repeated scans yield the same order.
pub(super) fn build_walker(root: &Path, rules: &Rules) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(root);
    walker_builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    debug!("Configuring WalkBuilder: standard_filters disabled, sorted by file name.");

    let rules = rules.clone();
    walker_builder.filter_entry(move |entry| keep_entry(entry, &rules));
    walker_builder.build()
}

/// Prunes hidden entries and excluded directories before they are yielded
/// (or descended into). The root itself is always kept.
fn keep_entry(entry: &DirEntry, rules: &Rules) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        trace!("Pruning hidden entry: {}", entry.path().display());
        return false;
    }
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    if is_dir && rules.is_excluded_dir_name(&name) {
        debug!("Pruning excluded directory: {}", entry.path().display());
        return false;
    }
    true
}
