use std::path::{Path, PathBuf};

/// Index of a node inside a [`SelectionTree`](super::SelectionTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
}

impl CheckState {
    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }

    pub fn toggled(self) -> Self {
        match self {
            CheckState::Checked => CheckState::Unchecked,
            CheckState::Unchecked => CheckState::Checked,
        }
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File { absolute_path: PathBuf },
}

/// A directory or file in the selection tree.
///
/// Directories own their children through the id list, kept in the order the
/// path segments were first seen. A directory's check state is only the last
/// bulk value applied to it; it is never derived from its children.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
    /// Path from the scan root. Empty for the root node.
    pub relative_path: PathBuf,
    /// `false` for binary files. Locked nodes stay unchecked forever.
    pub checkable: bool,
    pub check_state: CheckState,
    pub(super) children: Vec<NodeId>,
}

impl TreeNode {
    pub(super) fn directory(name: String, relative_path: PathBuf) -> Self {
        Self {
            name,
            kind: NodeKind::Directory,
            relative_path,
            checkable: true,
            check_state: CheckState::Unchecked,
            children: Vec::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory)
    }

    pub fn is_file(&self) -> bool {
        !self.is_dir()
    }

    /// Absolute path of a file node. Directories have none.
    pub fn absolute_path(&self) -> Option<&Path> {
        match &self.kind {
            NodeKind::File { absolute_path } => Some(absolute_path),
            NodeKind::Directory => None,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_checked(&self) -> bool {
        self.check_state.is_checked()
    }
}
