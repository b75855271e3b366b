// src/config/loader.rs

//! Loads the rule table from a user rule file layered over the built-in defaults.
//!
//! The file is Markdown with a fenced JSON block, or a bare JSON object. Keys
//! present in the file replace the default value for that key wholesale; absent
//! keys keep their default. Any failure here degrades to the defaults.

use super::parsing::extract_json_block;
use super::RuleConfig;
use crate::errors::{Error, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Partial rule table as read from a user file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuleOverrides {
    pub code_extensions: Option<BTreeSet<String>>,
    pub exclude_extensions: Option<BTreeSet<String>>,
    pub exclude_patterns: Option<BTreeSet<String>>,
    pub exclude_dirs: Option<BTreeSet<String>>,
    pub exclude_files: Option<BTreeSet<String>>,
    pub include_dirs: Option<BTreeSet<String>>,
    pub include_files: Option<BTreeSet<String>>,
    pub max_file_size: Option<u64>,
}

impl RuleOverrides {
    /// Parses a rule file body: a fenced ```` ```json ```` block inside Markdown,
    /// or the whole text as a JSON object.
    pub fn parse(text: &str) -> Result<Self> {
        let json = match extract_json_block(text) {
            Some(block) => block,
            None if text.trim_start().starts_with('{') => text,
            None => {
                return Err(Error::Config(
                    "no ```json block found in rule file".to_string(),
                ))
            }
        };
        serde_json::from_str(json).map_err(|e| Error::Config(format!("malformed rule JSON: {}", e)))
    }

    /// Layers these overrides on top of `base`, key by key.
    pub fn apply(self, base: RuleConfig) -> RuleConfig {
        RuleConfig {
            code_extensions: self.code_extensions.unwrap_or(base.code_extensions),
            exclude_extensions: self.exclude_extensions.unwrap_or(base.exclude_extensions),
            exclude_patterns: self.exclude_patterns.unwrap_or(base.exclude_patterns),
            exclude_dirs: self.exclude_dirs.unwrap_or(base.exclude_dirs),
            exclude_files: self.exclude_files.unwrap_or(base.exclude_files),
            include_dirs: self.include_dirs.unwrap_or(base.include_dirs),
            include_files: self.include_files.unwrap_or(base.include_files),
            max_file_size: self.max_file_size.unwrap_or(base.max_file_size),
        }
    }
}

/// Builds a normalized rule table from a rule file body.
///
/// An empty `code_extensions` list or a zero `max_file_size` would make
/// nothing includable, so each is replaced by its default.
///
/// # Examples
/// ```
/// use aicodeprep::config::load_rules_from_str;
///
/// let md = "# My rules\n```json\n{\"code_extensions\": [\"PY\"], \"exclude_dirs\": [\"build\"]}\n```\n";
/// let rules = load_rules_from_str(md).unwrap();
/// assert_eq!(rules.code_extensions.len(), 1);
/// assert!(rules.code_extensions.contains(".py"));
/// assert!(rules.exclude_dirs.contains("build"));
/// ```
pub fn load_rules_from_str(text: &str) -> Result<RuleConfig> {
    let defaults = RuleConfig::default();
    let mut rules = RuleOverrides::parse(text)?.apply(defaults.clone());
    if rules.code_extensions.is_empty() {
        warn!("Rule file has an empty code_extensions list, using the default list.");
        rules.code_extensions = defaults.code_extensions;
    }
    if rules.max_file_size == 0 {
        warn!(
            "Rule file sets max_file_size to 0, using the default of {} bytes.",
            defaults.max_file_size
        );
        rules.max_file_size = defaults.max_file_size;
    }
    Ok(rules.normalized())
}

/// Loads the rule table, falling back to the defaults on any failure.
///
/// `None` means no user file was found; the defaults are returned as-is.
pub fn load_rules(path: Option<&Path>) -> RuleConfig {
    let Some(path) = path else {
        debug!("No rule file found, using built-in defaults.");
        return RuleConfig::default();
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "Could not read rule file '{}': {}. Using built-in defaults.",
                path.display(),
                e
            );
            return RuleConfig::default();
        }
    };

    match load_rules_from_str(&text) {
        Ok(rules) => {
            info!("Loaded rules from '{}'", path.display());
            debug!(
                "Rules: {} code extensions, {} excluded dirs, max size {} bytes",
                rules.code_extensions.len(),
                rules.exclude_dirs.len(),
                rules.max_file_size
            );
            rules
        }
        Err(e) => {
            warn!(
                "Ignoring rule file '{}': {}. Using built-in defaults.",
                path.display(),
                e
            );
            RuleConfig::default()
        }
    }
}
