// src/config/path_resolve.rs

use crate::constants::CONFIG_FILE_NAME;
use crate::errors::{io_error_with_path, Error, Result};
use directories::ProjectDirs;
use log::debug;
use std::path::{Path, PathBuf};

/// Resolves the scan root to an absolute, canonicalized directory path.
pub fn resolve_root(input_path: &str) -> Result<PathBuf> {
    let path = PathBuf::from(input_path);
    let resolved = path
        .canonicalize()
        .map_err(|e| io_error_with_path(e, &path))?;
    if !resolved.is_dir() {
        return Err(Error::InvalidRoot(resolved));
    }
    Ok(resolved)
}

/// Captures the working directory. Header paths and a relative output file
/// resolve against it.
pub fn resolve_work_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| io_error_with_path(e, "."))?;
    Ok(cwd.canonicalize().unwrap_or(cwd))
}

/// Picks the rule file to load.
///
/// An explicit path always wins, even if it does not exist (the loader then
/// warns and falls back). Otherwise the first existing candidate is used:
/// next to the executable, then the platform config directory.
pub fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let exe_candidate = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)));
    let user_candidate =
        ProjectDirs::from("", "", "aicodeprep").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME));

    let found = [exe_candidate, user_candidate]
        .into_iter()
        .flatten()
        .find(|candidate| candidate.is_file());
    debug!("Rule file lookup result: {:?}", found);
    found
}
