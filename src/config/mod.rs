//! Defines the `Config` struct and the include/exclude rule set.
//!
//! `RuleConfig` is the rule table the classifier and the selection tree share.
//! It is loaded once at startup (built-in defaults, optionally layered with a
//! user rule file) and never mutated afterwards. `Config` bundles the rules
//! with the per-run settings parsed from the CLI.

use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

mod builder;
mod loader;
mod parsing;
pub mod path_resolve;
mod validation;

pub use loader::{load_rules, load_rules_from_str, RuleOverrides};
pub use parsing::{normalize_extension, parse_max_size};
pub use path_resolve::{locate_config_file, resolve_root, resolve_work_dir};

/// Default maximum file size in bytes. Larger files are not reported at all.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_000_000;

const DEFAULT_CODE_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".java", ".cpp", ".h", ".c", ".hpp", ".cs", ".php", ".rb", ".go", ".rs",
    ".swift", ".kt",
];
const DEFAULT_EXCLUDE_EXTENSIONS: &[&str] = &[".pyc", ".class", ".o", ".obj"];
const DEFAULT_EXCLUDE_DIRS: &[&str] = &["__pycache__", ".git", "node_modules", "build", "dist"];
// Matched against file names, so these only catch files named like the dirs.
const DEFAULT_EXCLUDE_PATTERNS: &[&str] = DEFAULT_EXCLUDE_DIRS;

/// Include/exclude rule table consumed by the classifier and the selection tree.
///
/// Extension sets hold lower-cased values with a leading dot once
/// [`RuleConfig::normalized`] has run. Patterns are kept as written and
/// case-folded at match time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Extensions considered source code.
    pub code_extensions: BTreeSet<String>,
    /// Extensions never included by default, even if listed as code.
    pub exclude_extensions: BTreeSet<String>,
    /// Case-insensitive globs tested against the file name only.
    pub exclude_patterns: BTreeSet<String>,
    /// Directory basenames that are never descended into.
    pub exclude_dirs: BTreeSet<String>,
    /// Exact file names never included by default.
    pub exclude_files: BTreeSet<String>,
    /// Directory basenames whose direct children skip ancestor checks.
    pub include_dirs: BTreeSet<String>,
    /// Exact file names that are always included.
    pub include_files: BTreeSet<String>,
    /// Files larger than this many bytes are skipped by the walk.
    pub max_file_size: u64,
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            code_extensions: to_set(DEFAULT_CODE_EXTENSIONS),
            exclude_extensions: to_set(DEFAULT_EXCLUDE_EXTENSIONS),
            exclude_patterns: to_set(DEFAULT_EXCLUDE_PATTERNS),
            exclude_dirs: to_set(DEFAULT_EXCLUDE_DIRS),
            exclude_files: BTreeSet::new(),
            include_dirs: BTreeSet::new(),
            include_files: BTreeSet::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl RuleConfig {
    /// Returns a copy with every extension lower-cased and dot-prefixed.
    ///
    /// # Examples
    /// ```
    /// use aicodeprep::config::RuleConfig;
    ///
    /// let mut rules = RuleConfig::default();
    /// rules.code_extensions = ["RS".to_string(), ".Py".to_string()].into();
    /// let rules = rules.normalized();
    /// assert!(rules.code_extensions.contains(".rs"));
    /// assert!(rules.code_extensions.contains(".py"));
    /// ```
    pub fn normalized(mut self) -> Self {
        self.code_extensions = normalize_set(self.code_extensions);
        self.exclude_extensions = normalize_set(self.exclude_extensions);
        self
    }
}

fn normalize_set(set: BTreeSet<String>) -> BTreeSet<String> {
    set.iter()
        .filter_map(|ext| normalize_extension(ext))
        .collect()
}

/// Bulk and per-node actions applied to the tree before processing.
#[derive(Debug, Clone, Default)]
pub struct SelectionActions {
    /// Check every checkable node.
    pub select_all: bool,
    /// Uncheck every checkable node.
    pub deselect_all: bool,
    /// Relative paths to check. Directories propagate to their children.
    pub check: Vec<String>,
    /// Relative paths to uncheck. Directories propagate to their children.
    pub uncheck: Vec<String>,
}

/// Settings for the concatenated output artifact.
#[derive(Debug, Clone)]
pub struct OutputSettings {
    /// Output file. Relative paths resolve against `base_dir`.
    pub file: PathBuf,
    /// Header paths are shown relative to this directory. The CLI uses the
    /// working directory captured at startup.
    pub base_dir: PathBuf,
    /// Block layout for each file.
    pub format: OutputFormat,
    /// Free text appended after all file blocks.
    pub prompt: Option<String>,
    /// Whether to copy the text to the system clipboard after writing.
    pub copy_to_clipboard: bool,
}

/// Represents the fully resolved configuration for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonicalized scan root.
    pub root: PathBuf,
    /// Loaded and normalized rule table.
    pub rules: RuleConfig,
    /// Relative paths that replace default inclusion when present.
    pub selection_override: Option<BTreeSet<PathBuf>>,
    /// Tree edits applied before processing.
    pub actions: SelectionActions,
    /// Output artifact settings.
    pub output: OutputSettings,
    /// If `true`, print the tree and selection instead of writing output.
    pub dry_run: bool,
}

impl Config {
    /// Creates a `Config` rooted at `root` with default rules, for tests and doc tests.
    #[doc(hidden)]
    pub fn new_for_test(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            root: root.clone(),
            rules: RuleConfig::default(),
            selection_override: None,
            actions: SelectionActions::default(),
            output: OutputSettings {
                file: PathBuf::from(crate::constants::DEFAULT_OUTPUT_FILE),
                base_dir: root,
                format: OutputFormat::Xml,
                prompt: None,
                copy_to_clipboard: false,
            },
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_normalized() {
        let rules = RuleConfig::default();
        assert_eq!(rules.clone().normalized(), rules);
        assert!(rules.code_extensions.contains(".rs"));
        assert!(rules.exclude_dirs.contains("node_modules"));
        assert_eq!(rules.exclude_patterns, rules.exclude_dirs);
        assert_eq!(rules.max_file_size, DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn test_normalized_drops_empty_extensions() {
        let mut rules = RuleConfig::default();
        rules.exclude_extensions = ["".to_string(), "BAK".to_string()].into();
        let rules = rules.normalized();
        assert_eq!(rules.exclude_extensions.len(), 1);
        assert!(rules.exclude_extensions.contains(".bak"));
    }
}
