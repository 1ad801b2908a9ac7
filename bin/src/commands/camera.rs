//! Camera URLs and snapshot download.

use anyhow::{Context, Result, bail};
use moontray_lib::prelude::*;
use std::path::Path;
use tracing::info;

use crate::config::Config;

/// Prints the camera URLs, or saves a snapshot frame when `save` is given.
pub(crate) async fn camera(config: &Config, save: Option<&Path>) -> Result<()> {
    let Some(base) = config.printer.camera_url.as_deref() else {
        bail!("No camera configured; set [printer].camera_url or pass --camera-url");
    };
    let urls = CameraUrls::new(base).context("Invalid camera URL")?;

    let Some(path) = save else {
        println!("Stream:   {}", urls.stream());
        println!("Snapshot: {}", urls.snapshot());
        return Ok(());
    };

    let client = MoonrakerClient::new(&config.printer.moonraker_url, config.client_config())
        .context("Failed to create HTTP client")?;
    let frame = client
        .fetch_image(urls.snapshot())
        .await
        .context("Failed to download snapshot")?;
    tokio::fs::write(path, &frame)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = frame.len(), "Snapshot saved");
    println!("Saved snapshot to {}", path.display());
    Ok(())
}
