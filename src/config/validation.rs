// src/config/validation.rs

use super::RuleConfig;
use crate::cli::Cli;
use anyhow::{anyhow, Result};
use log::warn;

/// Validates combinations of CLI options that clap cannot easily express.
pub(super) fn validate_cli_options(cli: &Cli) -> Result<()> {
    if cli.output.trim().is_empty() {
        return Err(anyhow!("Output file name (-o) cannot be empty."));
    }

    if let Some(path) = cli.check.iter().find(|p| cli.uncheck.contains(p)) {
        return Err(anyhow!(
            "Path '{}' is passed to both --check and --uncheck.",
            path
        ));
    }

    Ok(())
}

/// Checks a loaded rule table. Overlaps are legal but worth a warning.
pub(super) fn validate_rules(rules: &RuleConfig) -> Result<()> {
    if rules.max_file_size == 0 {
        return Err(anyhow!("max_file_size must be greater than zero."));
    }
    for ext in rules.code_extensions.intersection(&rules.exclude_extensions) {
        warn!(
            "Extension '{}' is both a code extension and excluded; it will never be included by default.",
            ext
        );
    }
    Ok(())
}
