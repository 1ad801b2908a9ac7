//! Menu-bar plugin output.

use anyhow::Result;
use chrono::Local;
use tracing::warn;

use crate::config::Config;
use crate::display;

/// Polls once and prints the menu in the xbar/SwiftBar/Argos format.
///
/// An unreachable printer still produces a valid document so the menu-bar
/// host keeps showing the item.
pub(crate) async fn bar(config: &Config) -> Result<()> {
    let monitor = super::monitor(config)?;
    let poll_error = monitor.poll_once().await.err();
    if let Some(err) = &poll_error {
        warn!(error = %err, "Poll failed");
    }

    let mut menu = display::menu_state(&monitor.state(), config, &Local)?;
    if let Some(err) = poll_error {
        menu.details.push(format!("Printer unreachable: {err}"));
    }
    print!("{}", menu.render_xbar());

    Ok(())
}
