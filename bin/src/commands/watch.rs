//! Continuous tray title output.

use anyhow::Result;
use chrono::Local;
use tokio::sync::watch;
use tracing::info;

use crate::config::Config;
use crate::display;

/// Polls until ctrl-c, printing the title whenever the state changes.
pub(crate) async fn watch(config: &Config) -> Result<()> {
    let monitor = super::monitor(config)?;
    let mut updates = monitor.subscribe();
    let (stop, shutdown) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, shutting down");
            stop.send_replace(true);
        }
    });

    println!("{}", display::title(&updates.borrow_and_update(), &Local));

    let printer = async {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            println!("{}", display::title(&state, &Local));
        }
    };

    tokio::select! {
        () = monitor.run(config.poll_interval(), shutdown) => {}
        () = printer => {}
    }

    Ok(())
}
