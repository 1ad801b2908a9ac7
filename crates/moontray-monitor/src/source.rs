//! Source of per-poll printer data.

use async_trait::async_trait;
use moontray_fetch::{FetchError, MoonrakerClient, PrinterPoll};

/// Anything that can produce one poll's worth of printer data.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Fetches the current telemetry and loaded-file metadata.
    async fn poll(&self) -> Result<PrinterPoll, FetchError>;
}

#[async_trait]
impl TelemetrySource for MoonrakerClient {
    async fn poll(&self) -> Result<PrinterPoll, FetchError> {
        Self::poll(self).await
    }
}
