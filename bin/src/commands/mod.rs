//! CLI command implementations.

pub(crate) mod bar;
pub(crate) mod camera;
pub(crate) mod config;
pub(crate) mod estimate;
pub(crate) mod status;
pub(crate) mod watch;

use anyhow::{Context, Result};
use moontray_lib::prelude::*;

use crate::config::Config;

/// Creates a monitor bound to the configured printer.
pub(crate) fn monitor(config: &Config) -> Result<Monitor<MoonrakerClient>> {
    let client = MoonrakerClient::new(&config.printer.moonraker_url, config.client_config())
        .context("Failed to create Moonraker client")?;
    Ok(Monitor::new(client))
}
