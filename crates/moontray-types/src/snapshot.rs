//! Telemetry snapshot consumed by the estimator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated printer telemetry captured during a single poll cycle.
///
/// All inputs are normalized on construction so downstream arithmetic never
/// has to re-check them:
///
/// - `progress` is clamped to `[0, 1]`; non-finite values become `0`.
/// - `print_duration` below zero or non-finite becomes `0`.
/// - `speed_multiplier` that is zero, negative or non-finite becomes `1`.
/// - Duration hints that are negative or non-finite are dropped.
///
/// Deserialization goes through the same normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSnapshot")]
pub struct TelemetrySnapshot {
    progress: f64,
    print_duration: f64,
    speed_multiplier: f64,
    slice_estimated_seconds: Option<f64>,
    history_total_seconds: Option<f64>,
    now_epoch_seconds: f64,
}

/// Unvalidated wire form of [`TelemetrySnapshot`].
#[derive(Deserialize)]
struct RawSnapshot {
    progress: f64,
    print_duration: f64,
    speed_multiplier: f64,
    slice_estimated_seconds: Option<f64>,
    history_total_seconds: Option<f64>,
    now_epoch_seconds: f64,
}

impl From<RawSnapshot> for TelemetrySnapshot {
    fn from(raw: RawSnapshot) -> Self {
        Self::new(
            raw.progress,
            raw.print_duration,
            raw.speed_multiplier,
            raw.now_epoch_seconds,
        )
        .with_slicer_estimate(raw.slice_estimated_seconds)
        .with_completed_history(raw.history_total_seconds)
    }
}

impl TelemetrySnapshot {
    /// Creates a snapshot without slicer or history hints.
    #[must_use]
    pub fn new(
        progress: f64,
        print_duration: f64,
        speed_multiplier: f64,
        now_epoch_seconds: f64,
    ) -> Self {
        Self {
            progress: normalize_progress(progress),
            print_duration: non_negative(print_duration).unwrap_or(0.0),
            speed_multiplier: normalize_speed(speed_multiplier),
            slice_estimated_seconds: None,
            history_total_seconds: None,
            now_epoch_seconds: if now_epoch_seconds.is_finite() {
                now_epoch_seconds
            } else {
                0.0
            },
        }
    }

    /// Creates a snapshot taken at the given wall-clock time.
    #[must_use]
    pub fn at(
        progress: f64,
        print_duration: f64,
        speed_multiplier: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self::new(
            progress,
            print_duration,
            speed_multiplier,
            epoch_seconds(now),
        )
    }

    /// Attaches the slicer's estimated total duration for the current file.
    #[must_use]
    pub fn with_slicer_estimate(mut self, seconds: Option<f64>) -> Self {
        self.slice_estimated_seconds = seconds.and_then(non_negative);
        self
    }

    /// Attaches the actual total duration of a completed prior print of the
    /// same file.
    #[must_use]
    pub fn with_completed_history(mut self, total_seconds: Option<f64>) -> Self {
        self.history_total_seconds = total_seconds.and_then(non_negative);
        self
    }

    /// Fraction of the file consumed, in `[0, 1]`.
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Elapsed print time in seconds.
    #[must_use]
    pub const fn print_duration(&self) -> f64 {
        self.print_duration
    }

    /// Speed factor applied to the print, always positive.
    #[must_use]
    pub const fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Slicer-estimated total duration, when known.
    #[must_use]
    pub const fn slice_estimated_seconds(&self) -> Option<f64> {
        self.slice_estimated_seconds
    }

    /// Total duration of a completed prior run, when known.
    #[must_use]
    pub const fn history_total_seconds(&self) -> Option<f64> {
        self.history_total_seconds
    }

    /// Wall-clock time of the snapshot as seconds since the Unix epoch.
    #[must_use]
    pub const fn now_epoch_seconds(&self) -> f64 {
        self.now_epoch_seconds
    }
}

/// Converts a UTC timestamp into fractional epoch seconds.
fn epoch_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp() as f64 + f64::from(time.timestamp_subsec_millis()) / 1000.0
}

fn normalize_progress(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn normalize_speed(speed: f64) -> f64 {
    if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        1.0
    }
}

fn non_negative(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}
