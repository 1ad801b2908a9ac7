//! One-shot printer status.

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::Config;
use crate::display;

/// Polls once and prints the title followed by the detail lines.
pub(crate) async fn status(config: &Config) -> Result<()> {
    let monitor = super::monitor(config)?;
    monitor
        .poll_once()
        .await
        .with_context(|| format!("Failed to reach printer at {}", config.printer.moonraker_url))?;

    let state = monitor.state();
    println!("{}", display::title(&state, &Local));
    println!();
    for line in display::details(&state, &Local) {
        println!("  {line}");
    }

    Ok(())
}
