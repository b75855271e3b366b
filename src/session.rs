//! Owner of the scan root, the compiled rules and the selection tree.
//!
//! Everything here runs synchronously on the caller's thread. A session is
//! opened once per scan; dropping a new folder on it rebuilds the tree from
//! scratch.

use crate::config::{OutputSettings, SelectionActions};
use crate::discovery::classify;
use crate::errors::{Error, Result};
use crate::filtering::Rules;
use crate::output::{process_files, ClipboardStatus, OutputOptions};
use crate::tree::{CheckState, SelectionTree};
use log::{error, info, warn};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Result of a process action. Never an error: failures degrade to zero
/// files processed with the reason attached.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub files_processed: usize,
    /// Where the output was written, if it was.
    pub output_path: Option<PathBuf>,
    pub clipboard: ClipboardStatus,
    /// Why nothing was written, when writing failed.
    pub error: Option<String>,
}

impl ProcessOutcome {
    fn nothing(error: Option<String>) -> Self {
        Self {
            files_processed: 0,
            output_path: None,
            clipboard: ClipboardStatus::Skipped,
            error,
        }
    }
}

#[derive(Debug)]
pub struct Session {
    root: PathBuf,
    rules: Rules,
    tree: SelectionTree,
}

impl Session {
    /// Classifies `root` and builds its selection tree.
    ///
    /// # Errors
    /// Returns an error if `root` is not a readable directory.
    pub fn open(
        root: &Path,
        rules: Rules,
        selection_override: Option<&BTreeSet<PathBuf>>,
    ) -> Result<Self> {
        let entries = classify(root, &rules)?;
        let tree = SelectionTree::build(root, &entries, &rules, selection_override);
        Ok(Self {
            root: root.to_path_buf(),
            rules,
            tree,
        })
    }

    /// Replaces the tree with a fresh scan of `root`. The previous selection
    /// is discarded; defaults apply again.
    pub fn rescan(&mut self, root: &Path) -> Result<()> {
        let entries = classify(root, &self.rules)?;
        self.tree = SelectionTree::build(root, &entries, &self.rules, None);
        self.root = root.to_path_buf();
        info!("Rescanned {}", root.display());
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tree(&self) -> &SelectionTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut SelectionTree {
        &mut self.tree
    }

    /// Checks a node by relative path. Returns `false` for a locked file.
    pub fn check(&mut self, relative_path: &str) -> Result<bool> {
        self.set(relative_path, CheckState::Checked)
    }

    /// Unchecks a node by relative path. Returns `false` for a locked file.
    pub fn uncheck(&mut self, relative_path: &str) -> Result<bool> {
        self.set(relative_path, CheckState::Unchecked)
    }

    fn set(&mut self, relative_path: &str, state: CheckState) -> Result<bool> {
        let normalized = relative_path.replace('\\', "/");
        let id = self
            .tree
            .find(&normalized)
            .ok_or_else(|| Error::UnknownPath(relative_path.to_string()))?;
        let changed = self.tree.set_check_state(id, state);
        if !changed {
            warn!("'{}' cannot be selected (binary file)", relative_path);
        }
        Ok(changed)
    }

    pub fn select_all(&mut self) {
        self.tree.select_all();
    }

    pub fn deselect_all(&mut self) {
        self.tree.deselect_all();
    }

    /// Applies bulk actions first, then checks, then unchecks.
    ///
    /// # Errors
    /// Returns `Error::UnknownPath` for the first path not in the tree.
    pub fn apply(&mut self, actions: &SelectionActions) -> Result<()> {
        if actions.select_all {
            self.select_all();
        }
        if actions.deselect_all {
            self.deselect_all();
        }
        for path in &actions.check {
            self.check(path)?;
        }
        for path in &actions.uncheck {
            self.uncheck(path)?;
        }
        Ok(())
    }

    /// Writes the current selection and copies it to the clipboard if asked.
    pub fn process(&self, settings: &OutputSettings) -> ProcessOutcome {
        let files = self.tree.selected_files();
        if files.is_empty() {
            warn!("{}", Error::NoFilesSelected);
            return ProcessOutcome::nothing(None);
        }

        let opts = OutputOptions {
            format: settings.format,
            base_dir: settings.base_dir.clone(),
            prompt: settings.prompt.clone(),
        };
        match process_files(&files, &settings.file, &opts, settings.copy_to_clipboard) {
            Ok(report) => {
                info!(
                    "Processed {} files into {}",
                    report.files_processed,
                    report.output_path.display()
                );
                ProcessOutcome {
                    files_processed: report.files_processed,
                    output_path: Some(report.output_path),
                    clipboard: report.clipboard,
                    error: None,
                }
            }
            Err(e) => {
                error!("Error writing output file: {}", e);
                ProcessOutcome::nothing(Some(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::output::OutputFormat;
    use std::fs;
    use tempfile::tempdir;

    fn settings(base: &Path, file: &str) -> OutputSettings {
        OutputSettings {
            file: PathBuf::from(file),
            base_dir: base.to_path_buf(),
            format: OutputFormat::Xml,
            prompt: None,
            copy_to_clipboard: false,
        }
    }

    fn open(root: &Path) -> Session {
        Session::open(root, Rules::new(&RuleConfig::default()), None).unwrap()
    }

    #[test]
    fn test_open_invalid_root() {
        let result = Session::open(
            Path::new("definitely/not/here"),
            Rules::new(&RuleConfig::default()),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_check_unknown_path() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let mut session = open(temp.path());
        assert!(matches!(
            session.check("nope.py"),
            Err(Error::UnknownPath(_))
        ));
        Ok(())
    }

    #[test]
    fn test_apply_order() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("src"))?;
        fs::write(temp.path().join("src/a.py"), "a")?;
        fs::write(temp.path().join("src/b.py"), "b")?;
        fs::write(temp.path().join("readme.txt"), "r")?;
        let mut session = open(temp.path());

        session.apply(&SelectionActions {
            select_all: false,
            deselect_all: true,
            check: vec!["src".into(), "readme.txt".into()],
            uncheck: vec!["src/b.py".into()],
        })?;
        assert_eq!(
            session.tree().selected_relative_paths(),
            vec![PathBuf::from("readme.txt"), PathBuf::from("src/a.py")]
        );
        Ok(())
    }

    #[test]
    fn test_process_writes_and_counts() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.py"), "print(1)")?;
        let session = open(temp.path());
        let outcome = session.process(&settings(temp.path(), "fullcode.txt"));
        assert_eq!(outcome.files_processed, 1);
        assert!(outcome.error.is_none());
        let text = fs::read_to_string(temp.path().join("fullcode.txt"))?;
        assert!(text.starts_with("a.py:\n<code>\nprint(1)\n</code>\n\n"));
        Ok(())
    }

    #[test]
    fn test_process_write_failure_reports_zero() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.py"), "print(1)")?;
        let session = open(temp.path());
        let outcome = session.process(&settings(temp.path(), "no_such_dir/out.txt"));
        assert_eq!(outcome.files_processed, 0);
        assert!(outcome.output_path.is_none());
        assert!(outcome.error.is_some());
        Ok(())
    }

    #[test]
    fn test_process_empty_selection_writes_nothing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("notes.txt"), "n")?;
        let session = open(temp.path());
        let outcome = session.process(&settings(temp.path(), "fullcode.txt"));
        assert_eq!(outcome.files_processed, 0);
        assert!(outcome.error.is_none());
        assert!(!temp.path().join("fullcode.txt").exists());
        Ok(())
    }

    #[test]
    fn test_rescan_rebuilds_with_defaults() -> anyhow::Result<()> {
        let first = tempdir()?;
        let second = tempdir()?;
        fs::write(first.path().join("a.py"), "a")?;
        fs::write(second.path().join("b.rs"), "b")?;
        fs::write(second.path().join("c.txt"), "c")?;

        let mut session = open(first.path());
        session.select_all();
        session.rescan(second.path())?;
        assert_eq!(session.root(), second.path());
        assert_eq!(
            session.tree().selected_relative_paths(),
            vec![PathBuf::from("b.rs")]
        );
        assert!(session.tree().find("a.py").is_none());
        Ok(())
    }
}
