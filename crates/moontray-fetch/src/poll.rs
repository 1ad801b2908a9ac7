//! One poll cycle's telemetry and its conversion into estimator input.

use chrono::{DateTime, Utc};
use moontray_types::{FileMetadata, TelemetrySnapshot};

use crate::PrinterTelemetry;

/// Telemetry and file metadata gathered in a single poll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrinterPoll {
    /// Printer status objects.
    pub telemetry: PrinterTelemetry,
    /// Metadata of the loaded file, empty when no file is loaded.
    pub metadata: FileMetadata,
}

impl PrinterPoll {
    /// Builds the validated estimator input for this poll.
    ///
    /// Absent progress and duration map to zero, an absent speed factor to
    /// one. Slicer and history hints come from the file metadata; history is
    /// only used when the prior run completed.
    #[must_use]
    pub fn snapshot(&self, now: DateTime<Utc>) -> TelemetrySnapshot {
        TelemetrySnapshot::at(
            self.telemetry.progress.unwrap_or(0.0),
            self.telemetry.print_duration.unwrap_or(0.0),
            self.telemetry.speed_factor.unwrap_or(1.0),
            now,
        )
        .with_slicer_estimate(self.metadata.estimated_time)
        .with_completed_history(self.metadata.completed_duration())
    }
}
