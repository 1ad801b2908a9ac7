//! Time estimate derived from a telemetry snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Remaining-time figures for the current print.
///
/// All `*_remaining_seconds` values are non-negative. A value of `0` for
/// `file_remaining_seconds` means there is not enough data yet; the slicer and
/// history figures are `None` when their source is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    /// Whole percent of the file consumed, `floor(progress * 100)`.
    pub progress_percent: u8,
    /// Linear extrapolation of elapsed time over progress.
    pub file_remaining_seconds: f64,
    /// Remaining time according to the slicer's total estimate.
    pub slicer_remaining_seconds: Option<f64>,
    /// Remaining time according to a completed prior run of the same file.
    pub history_remaining_seconds: Option<f64>,
    /// Most trustworthy remaining time (history, then slicer, then file).
    pub best_remaining_seconds: f64,
    /// Smaller of the slicer and file figures, used for the at-a-glance display.
    pub combined_remaining_seconds: f64,
    /// Absolute completion time, `now + best_remaining_seconds`.
    pub eta_epoch_seconds: f64,
}

impl TimeEstimate {
    /// Returns the estimated completion time as a UTC timestamp.
    ///
    /// Returns `None` if the epoch value is outside chrono's range.
    #[must_use]
    pub fn eta(&self) -> Option<DateTime<Utc>> {
        let millis = (self.eta_epoch_seconds * 1000.0).round();
        if !millis.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }

    /// Returns true if none of the sources produced a remaining time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best_remaining_seconds <= 0.0
    }
}
