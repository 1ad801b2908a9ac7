//! Config inspection command.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{self, Config};

/// Prints the config file location and the effective settings as TOML.
pub(crate) fn show_config(config: &Config, explicit: Option<&Path>, path_only: bool) -> Result<()> {
    let location = explicit
        .map(Path::to_path_buf)
        .or_else(config::default_path);

    match &location {
        Some(path) if path_only => println!("{}", path.display()),
        Some(path) => {
            let note = if path.exists() { "" } else { " (not found, using defaults)" };
            println!("# {}{note}", path.display());
        }
        None => println!("# no config directory available"),
    }
    if path_only {
        return Ok(());
    }

    let text = toml::to_string_pretty(config).context("Failed to serialize config")?;
    print!("{text}");
    Ok(())
}
