use super::{
    loader::load_rules,
    parsing::{parse_max_size, parse_selection_list},
    path_resolve::{locate_config_file, resolve_root, resolve_work_dir},
    validation::{validate_cli_options, validate_rules},
    Config, OutputSettings, SelectionActions,
};
use crate::cli::Cli;
use crate::errors::io_error_with_path;
use anyhow::{Context, Result};
use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        validate_cli_options(&cli)?;

        let root = resolve_root(&cli.directory)
            .with_context(|| format!("Cannot scan '{}'", cli.directory))?;
        debug!("Resolved scan root: {}", root.display());
        let work_dir = resolve_work_dir().context("Cannot determine the working directory")?;

        let config_path = locate_config_file(cli.config.as_deref().map(Path::new));
        let mut rules = load_rules(config_path.as_deref());
        if let Some(max_size) = parse_max_size(cli.max_size)? {
            rules.max_file_size = max_size;
        }
        validate_rules(&rules)?;

        let selection_override = cli
            .selection
            .as_deref()
            .map(read_selection_file)
            .transpose()?;

        Ok(Config {
            root,
            rules,
            selection_override,
            actions: SelectionActions {
                select_all: cli.select_all,
                deselect_all: cli.deselect_all,
                check: cli.check,
                uncheck: cli.uncheck,
            },
            output: OutputSettings {
                file: PathBuf::from(cli.output),
                base_dir: work_dir,
                format: cli.format,
                prompt: cli.prompt.filter(|p| !p.trim().is_empty()),
                copy_to_clipboard: !cli.no_copy,
            },
            dry_run: cli.dry_run,
        })
    }
}

fn read_selection_file(path: &str) -> Result<BTreeSet<PathBuf>> {
    let text = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    let selection = parse_selection_list(&text);
    debug!("Loaded {} paths from selection file", selection.len());
    Ok(selection)
}
