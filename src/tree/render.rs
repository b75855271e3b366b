//! Text rendering of the selection tree with checkbox markers.

use super::{NodeId, SelectionTree};

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";
const LOCKED: &str = "[#]";

impl SelectionTree {
    /// Renders the tree with box-drawing connectors.
    ///
    /// `[x]` is checked, `[ ]` unchecked and `[#]` a locked (binary) file.
    /// Directories carry a trailing `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aicodeprep::config::RuleConfig;
    /// use aicodeprep::core_types::FileEntry;
    /// use aicodeprep::filtering::Rules;
    /// use aicodeprep::tree::SelectionTree;
    /// use std::path::{Path, PathBuf};
    ///
    /// let entries = vec![
    ///     FileEntry {
    ///         absolute_path: PathBuf::from("/proj/src/main.rs"),
    ///         relative_path: PathBuf::from("src/main.rs"),
    ///         default_included: true,
    ///         ..Default::default()
    ///     },
    ///     FileEntry {
    ///         absolute_path: PathBuf::from("/proj/logo.png"),
    ///         relative_path: PathBuf::from("logo.png"),
    ///         is_binary: true,
    ///         ..Default::default()
    ///     },
    /// ];
    /// let tree = SelectionTree::build(
    ///     Path::new("/proj"),
    ///     &entries,
    ///     &Rules::new(&RuleConfig::default()),
    ///     None,
    /// );
    /// assert_eq!(
    ///     tree.render(),
    ///     "proj/\n├── [ ] src/\n│   └── [x] main.rs\n└── [#] logo.png\n"
    /// );
    /// ```
    pub fn render(&self) -> String {
        let mut out = format!("{}/\n", self.node(self.root()).name);
        self.render_children(self.root(), "", &mut out);
        out
    }

    fn render_children(&self, id: NodeId, prefix: &str, out: &mut String) {
        let children = self.node(id).children();
        for (i, &child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let node = self.node(child);
            let marker = if !node.checkable {
                LOCKED
            } else if node.is_checked() {
                CHECKED
            } else {
                UNCHECKED
            };
            let connector = if is_last { "└── " } else { "├── " };
            let suffix = if node.is_dir() { "/" } else { "" };
            out.push_str(&format!("{prefix}{connector}{marker} {}{suffix}\n", node.name));

            if node.is_dir() {
                let next_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
                self.render_children(child, &next_prefix, out);
            }
        }
    }
}
