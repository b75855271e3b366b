// src/filtering/rules.rs

//! Compiled form of the rule table, shared by the classifier and the tree.

use super::extension::file_extension;
use crate::config::RuleConfig;
use crate::constants::VENV_MARKER;
use glob::{MatchOptions, Pattern};
use log::{debug, warn};
use std::collections::HashSet;
use std::path::Path;

const PATTERN_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Predicates over file and directory names, compiled once from a [`RuleConfig`].
///
/// # Examples
///
/// ```
/// use aicodeprep::config::RuleConfig;
/// use aicodeprep::filtering::Rules;
/// use std::path::Path;
///
/// let mut config = RuleConfig::default();
/// config.exclude_patterns.insert("*.BAK".to_string());
/// let rules = Rules::new(&config);
///
/// assert!(rules.is_excluded_dir_name("node_modules"));
/// assert!(rules.is_excluded_dir_name("MyVenv"));
/// assert!(rules.matches_exclude_pattern("notes.md.bak"));
/// assert!(rules.passes_file_rules(Path::new("src/main.rs")));
/// assert!(!rules.passes_file_rules(Path::new("README.txt")));
/// ```
#[derive(Debug, Clone)]
pub struct Rules {
    code_extensions: HashSet<String>,
    exclude_extensions: HashSet<String>,
    exclude_patterns: Vec<Pattern>,
    exclude_dirs: HashSet<String>,
    exclude_files: HashSet<String>,
    include_dirs: HashSet<String>,
    include_files: HashSet<String>,
    max_file_size: u64,
}

impl Rules {
    /// Compiles the rule table. Invalid glob patterns are logged and dropped.
    pub fn new(config: &RuleConfig) -> Self {
        let config = config.clone().normalized();
        let exclude_patterns = config
            .exclude_patterns
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(glob) => {
                    debug!("Compiled exclude pattern: {}", p);
                    Some(glob)
                }
                Err(e) => {
                    warn!("Invalid exclude pattern '{}': {}", p, e);
                    None
                }
            })
            .collect();

        Self {
            code_extensions: config.code_extensions.into_iter().collect(),
            exclude_extensions: config.exclude_extensions.into_iter().collect(),
            exclude_patterns,
            exclude_dirs: config.exclude_dirs.into_iter().collect(),
            exclude_files: config.exclude_files.into_iter().collect(),
            include_dirs: config.include_dirs.into_iter().collect(),
            include_files: config.include_files.into_iter().collect(),
            max_file_size: config.max_file_size,
        }
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Directory names that are never descended into: exact `exclude_dirs`
    /// members, and anything containing "venv" in any case.
    pub fn is_excluded_dir_name(&self, name: &str) -> bool {
        self.exclude_dirs.contains(name) || name.to_lowercase().contains(VENV_MARKER)
    }

    pub fn is_include_dir_name(&self, name: &str) -> bool {
        self.include_dirs.contains(name)
    }

    pub fn is_include_file_name(&self, name: &str) -> bool {
        self.include_files.contains(name)
    }

    pub fn is_excluded_file_name(&self, name: &str) -> bool {
        self.exclude_files.contains(name)
    }

    pub fn is_code_file(&self, path: &Path) -> bool {
        file_extension(path).is_some_and(|ext| self.code_extensions.contains(&ext))
    }

    pub fn has_excluded_extension(&self, path: &Path) -> bool {
        file_extension(path).is_some_and(|ext| self.exclude_extensions.contains(&ext))
    }

    /// Case-insensitive glob match against a bare file name.
    pub fn matches_exclude_pattern(&self, file_name: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|p| p.matches_with(file_name, PATTERN_OPTIONS))
    }

    /// Exclude-file, exclude-extension or exclude-pattern hit.
    ///
    /// This is the gate folder propagation applies to each file child.
    pub fn is_file_rule_excluded(&self, path: &Path) -> bool {
        let name = file_name_str(path);
        self.is_excluded_file_name(&name)
            || self.has_excluded_extension(path)
            || self.matches_exclude_pattern(&name)
    }

    /// Code extension and no file-level exclusion.
    pub fn passes_file_rules(&self, path: &Path) -> bool {
        self.is_code_file(path) && !self.is_file_rule_excluded(path)
    }
}

pub(crate) fn file_name_str(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_with(f: impl FnOnce(&mut RuleConfig)) -> Rules {
        let mut config = RuleConfig::default();
        f(&mut config);
        Rules::new(&config)
    }

    #[test]
    fn test_excluded_extension_beats_code_extension() {
        let rules = rules_with(|c| {
            c.code_extensions.insert(".log".into());
            c.exclude_extensions.insert(".LOG".into());
        });
        assert!(rules.is_code_file(Path::new("app.log")));
        assert!(rules.is_file_rule_excluded(Path::new("app.log")));
        assert!(!rules.passes_file_rules(Path::new("app.log")));
    }

    #[test]
    fn test_venv_substring_any_case() {
        let rules = rules_with(|_| {});
        assert!(rules.is_excluded_dir_name("venv"));
        assert!(rules.is_excluded_dir_name(".venv"));
        assert!(rules.is_excluded_dir_name("project-VENV-3.11"));
        assert!(!rules.is_excluded_dir_name("src"));
    }

    #[test]
    fn test_exclude_dir_is_exact_match() {
        let rules = rules_with(|_| {});
        assert!(rules.is_excluded_dir_name("build"));
        assert!(!rules.is_excluded_dir_name("Build"));
        assert!(!rules.is_excluded_dir_name("builder"));
    }

    #[test]
    fn test_pattern_character_classes() {
        let rules = rules_with(|c| {
            c.exclude_patterns = ["test_?.py".into(), "[ab]*.rs".into()].into();
        });
        assert!(rules.matches_exclude_pattern("test_1.py"));
        assert!(rules.matches_exclude_pattern("TEST_X.PY"));
        assert!(!rules.matches_exclude_pattern("test_12.py"));
        assert!(rules.matches_exclude_pattern("alpha.rs"));
        assert!(!rules.matches_exclude_pattern("gamma.rs"));
    }

    #[test]
    fn test_invalid_pattern_is_dropped() {
        let rules = rules_with(|c| {
            c.exclude_patterns = ["[unclosed".into(), "*.tmp".into()].into();
        });
        assert!(rules.matches_exclude_pattern("x.tmp"));
        assert!(!rules.matches_exclude_pattern("[unclosed"));
    }

    #[test]
    fn test_exclude_files_exact_name() {
        let rules = rules_with(|c| {
            c.exclude_files.insert("setup.py".into());
        });
        assert!(rules.is_file_rule_excluded(Path::new("pkg/setup.py")));
        assert!(rules.passes_file_rules(Path::new("pkg/main.py")));
    }

    #[test]
    fn test_default_patterns_match_dir_like_file_names() {
        let rules = rules_with(|_| {});
        assert!(rules.matches_exclude_pattern("DIST"));
        assert!(rules.is_file_rule_excluded(Path::new("pkg/node_modules")));
        assert!(!rules.matches_exclude_pattern("build.py"));
    }

    #[test]
    fn test_file_without_extension_is_not_code() {
        let rules = rules_with(|_| {});
        assert!(!rules.is_code_file(Path::new("Makefile")));
    }
}
