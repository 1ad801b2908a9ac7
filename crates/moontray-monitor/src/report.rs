//! Published poll results.

use chrono::{DateTime, Utc};
use moontray_estimate::{LayerProgress, estimate};
use moontray_fetch::PrinterPoll;
use moontray_types::{FileMetadata, PrinterStatus, TelemetrySnapshot, TimeEstimate};

/// Everything derived from one successful poll.
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterReport {
    /// Non-timing printer status.
    pub status: PrinterStatus,
    /// Metadata of the loaded file.
    pub metadata: FileMetadata,
    /// Estimator input built from the poll.
    pub snapshot: TelemetrySnapshot,
    /// Estimator output.
    pub estimate: TimeEstimate,
    /// Current layer and total layer count.
    pub layer: LayerProgress,
    /// When the poll completed.
    pub fetched_at: DateTime<Utc>,
}

impl PrinterReport {
    /// Builds a report from a poll taken at `now`.
    #[must_use]
    pub fn from_poll(poll: PrinterPoll, now: DateTime<Utc>) -> Self {
        let snapshot = poll.snapshot(now);
        let layer = LayerProgress::new(
            snapshot.print_duration(),
            poll.telemetry.status.gcode_z,
            &poll.metadata,
        );
        Self {
            status: poll.telemetry.status,
            metadata: poll.metadata,
            estimate: estimate(&snapshot),
            snapshot,
            layer,
            fetched_at: now,
        }
    }
}

/// What the monitor currently knows about the printer.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MonitorState {
    /// No poll has succeeded yet.
    #[default]
    Connecting,
    /// The latest poll succeeded.
    Live(PrinterReport),
    /// The latest poll failed; `report` is from the last success.
    Stale {
        /// Last successful report.
        report: PrinterReport,
        /// Error from the failed poll.
        error: String,
    },
}

impl MonitorState {
    /// Returns the most recent report, live or stale.
    #[must_use]
    pub const fn report(&self) -> Option<&PrinterReport> {
        match self {
            Self::Connecting => None,
            Self::Live(report) | Self::Stale { report, .. } => Some(report),
        }
    }

    /// Returns true when the report is from an earlier poll than the latest.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::Stale { .. })
    }

    /// Returns the error of the latest failed poll, if the state is stale.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Stale { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Applies a failed poll. A report already held is kept.
    #[must_use]
    pub(crate) fn into_failed(self, error: String) -> Self {
        match self {
            Self::Connecting => Self::Connecting,
            Self::Live(report) | Self::Stale { report, .. } => Self::Stale { report, error },
        }
    }
}
