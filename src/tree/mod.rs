//! In-memory selection tree mirroring the scanned directory layout.
//!
//! The tree is an arena of [`TreeNode`]s addressed by [`NodeId`], with a
//! synthetic root for the scan root itself. It is built once per scan from the
//! classifier's flat list and rebuilt wholesale on rescan.
//!
//! Mutations are synchronous and explicit: toggling a directory runs the
//! downward propagation in [`SelectionTree::set_check_state`], select all and
//! deselect all force every checkable node, and nothing ever bubbles upward.
//! [`SelectionTree::selected_files`] is the only authority on what gets
//! processed.

use crate::core_types::FileEntry;
use crate::filtering::Rules;
use log::{debug, trace};
use std::collections::{BTreeSet, HashMap};
use std::path::{Component, Path, PathBuf};

mod node;
mod propagation;
mod render;

pub use node::{CheckState, NodeId, NodeKind, TreeNode};

const ROOT: NodeId = NodeId(0);

/// Checkbox tree over the classifier's output.
#[derive(Debug, Clone)]
pub struct SelectionTree {
    nodes: Vec<TreeNode>,
    dir_index: HashMap<PathBuf, NodeId>,
    file_index: HashMap<PathBuf, NodeId>,
    rules: Rules,
}

impl SelectionTree {
    /// Builds the tree from classifier entries.
    ///
    /// A leaf starts checked iff its entry is included by default. When
    /// `selection_override` is given it wholly replaces default inclusion: a
    /// leaf starts checked iff its relative path is in the set. Binary leaves
    /// are locked unchecked either way. Directories start unchecked.
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
    /// let entry = |rel: &str, included: bool| FileEntry {
    ///     absolute_path: Path::new("/proj").join(rel),
    ///     relative_path: PathBuf::from(rel),
    ///     default_included: included,
    ///     ..Default::default()
    /// };
    /// let entries = vec![entry("src/main.rs", true), entry("README.txt", false)];
    /// let rules = Rules::new(&RuleConfig::default());
    ///
    /// let tree = SelectionTree::build(Path::new("/proj"), &entries, &rules, None);
    /// assert_eq!(tree.selected_files(), vec![PathBuf::from("/proj/src/main.rs")]);
    /// assert!(tree.find("src").is_some());
    /// ```
    pub fn build(
        root: &Path,
        entries: &[FileEntry],
        rules: &Rules,
        selection_override: Option<&BTreeSet<PathBuf>>,
    ) -> Self {
        let root_name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());

        let mut tree = Self {
            nodes: vec![TreeNode::directory(root_name, PathBuf::new())],
            dir_index: HashMap::from([(PathBuf::new(), ROOT)]),
            file_index: HashMap::new(),
            rules: rules.clone(),
        };
        for entry in entries {
            tree.insert_entry(entry, selection_override);
        }
        debug!(
            "Built selection tree: {} nodes, {} files, {} checked",
            tree.nodes.len(),
            tree.file_index.len(),
            tree.selected_files().len()
        );
        tree
    }

    fn insert_entry(&mut self, entry: &FileEntry, selection_override: Option<&BTreeSet<PathBuf>>) {
        let relative_path = normalize_relative(&entry.relative_path);
        if self.file_index.contains_key(&relative_path) {
            trace!("Duplicate entry ignored: {}", relative_path.display());
            return;
        }
        let parent = match relative_path.parent() {
            Some(parent) => self.ensure_dir(parent),
            None => ROOT,
        };

        let checkable = entry.is_checkable();
        let wanted = match selection_override {
            Some(set) => set.contains(&relative_path),
            None => entry.default_included,
        };
        let name = relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let id = self.push_node(
            parent,
            TreeNode {
                name,
                kind: NodeKind::File {
                    absolute_path: entry.absolute_path.clone(),
                },
                relative_path: relative_path.clone(),
                checkable,
                check_state: CheckState::from(checkable && wanted),
                children: Vec::new(),
            },
        );
        self.file_index.insert(relative_path, id);
    }

    /// Returns the directory node for `relative_dir`, creating it and any
    /// missing ancestors. Each path prefix maps to exactly one node.
    fn ensure_dir(&mut self, relative_dir: &Path) -> NodeId {
        if let Some(&id) = self.dir_index.get(relative_dir) {
            return id;
        }
        let parent = match relative_dir.parent() {
            Some(parent) => self.ensure_dir(parent),
            None => ROOT,
        };
        let name = relative_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let id = self.push_node(
            parent,
            TreeNode::directory(name, relative_dir.to_path_buf()),
        );
        self.dir_index.insert(relative_dir.to_path_buf(), id);
        id
    }

    fn push_node(&mut self, parent: NodeId, node: TreeNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The synthetic node standing for the scan root.
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// # Panics
    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Looks up a node by its path relative to the scan root. An empty path
    /// or `.` is the root.
    pub fn find(&self, relative_path: impl AsRef<Path>) -> Option<NodeId> {
        let key = normalize_relative(relative_path.as_ref());
        self.file_index
            .get(&key)
            .or_else(|| self.dir_index.get(&key))
            .copied()
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when the scan reported no files.
    pub fn is_empty(&self) -> bool {
        self.file_index.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.file_index.len()
    }

    /// Node ids in tree order: parent before children, children in stored order.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev());
        }
        order
    }

    fn selected_leaves(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        self.preorder()
            .into_iter()
            .map(move |id| &self.nodes[id.0])
            .filter(|n| n.is_file() && n.checkable && n.is_checked())
    }

    /// Absolute paths of every checkable, checked leaf, in tree order.
    ///
    /// Directory check state is never read.
    pub fn selected_files(&self) -> Vec<PathBuf> {
        self.selected_leaves()
            .filter_map(|n| n.absolute_path().map(Path::to_path_buf))
            .collect()
    }

    /// Relative paths of the current selection, in tree order.
    pub fn selected_relative_paths(&self) -> Vec<PathBuf> {
        self.selected_leaves()
            .map(|n| n.relative_path.clone())
            .collect()
    }
}

/// Drops `.` components so `./src/a.py` and `src/a.py` address the same node.
fn normalize_relative(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
