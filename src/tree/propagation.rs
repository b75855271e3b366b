// src/tree/propagation.rs

//! Check-state changes: single toggles, folder propagation, bulk actions.

use super::{CheckState, NodeId, SelectionTree};
use log::{debug, trace};

impl SelectionTree {
    /// Applies a direct user action to one node.
    ///
    /// A directory propagates `state` downward through the exclusion gate; the
    /// directory itself is never skipped, only its excluded descendants. A
    /// checkable file changes alone. A locked file is left untouched and
    /// `false` is returned.
    pub fn set_check_state(&mut self, id: NodeId, state: CheckState) -> bool {
        let node = self.node(id);
        if node.is_dir() {
            debug!("Propagating {:?} from '{}'", state, node.relative_path.display());
            self.smart_check(id, state, true);
            return true;
        }
        if !node.checkable {
            debug!("Refusing to change locked file '{}'", node.relative_path.display());
            return false;
        }
        self.nodes[id.0].check_state = state;
        true
    }

    /// Flips the node's current state through [`Self::set_check_state`].
    pub fn toggle(&mut self, id: NodeId) -> bool {
        let next = self.node(id).check_state.toggled();
        self.set_check_state(id, next)
    }

    fn smart_check(&mut self, id: NodeId, state: CheckState, is_root: bool) {
        if !is_root && self.rules.is_excluded_dir_name(&self.nodes[id.0].name) {
            trace!("Skipping excluded directory '{}'", self.nodes[id.0].name);
            self.nodes[id.0].check_state = CheckState::Unchecked;
            return;
        }

        let children = self.nodes[id.0].children.clone();
        for child in children {
            let node = &self.nodes[child.0];
            if node.is_dir() {
                self.smart_check(child, state, false);
                continue;
            }
            let forced_off = !node.checkable || self.rules.is_file_rule_excluded(&node.relative_path);
            self.nodes[child.0].check_state = if forced_off {
                CheckState::Unchecked
            } else {
                state
            };
        }
        self.nodes[id.0].check_state = state;
    }

    /// Checks every checkable node. Exclusion rules are not consulted.
    pub fn select_all(&mut self) {
        self.force_all(CheckState::Checked);
    }

    /// Unchecks every checkable node.
    pub fn deselect_all(&mut self) {
        self.force_all(CheckState::Unchecked);
    }

    fn force_all(&mut self, state: CheckState) {
        for node in self.nodes.iter_mut().filter(|n| n.checkable) {
            node.check_state = state;
        }
        debug!("Forced every checkable node to {:?}", state);
    }
}
