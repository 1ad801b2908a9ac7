//! Remaining print time estimation.

use moontray_types::{TelemetrySnapshot, TimeEstimate};

/// Estimates the remaining print time from a telemetry snapshot.
///
/// Three independent figures are computed:
///
/// - **file**: elapsed time extrapolated linearly over the progress fraction,
/// - **slicer**: the slicer's total estimate minus elapsed time,
/// - **history**: a completed prior run's total minus elapsed time.
///
/// Each is scaled by the inverse of the speed multiplier and clamped at zero.
/// The ETA follows the most specific source with a positive figure
/// (history, then slicer, then file). The combined figure is the smaller of
/// the slicer and file values and is meant for the humanized display only.
///
/// This function never fails: missing inputs produce zero or `None`.
///
/// # Example
///
/// ```
/// use moontray_estimate::estimate;
/// use moontray_types::TelemetrySnapshot;
///
/// let snapshot = TelemetrySnapshot::new(0.5, 600.0, 1.0, 1_000.0);
/// let estimate = estimate(&snapshot);
///
/// assert_eq!(estimate.progress_percent, 50);
/// assert_eq!(estimate.file_remaining_seconds, 600.0);
/// assert_eq!(estimate.eta_epoch_seconds, 1_600.0);
/// ```
#[must_use]
pub fn estimate(snapshot: &TelemetrySnapshot) -> TimeEstimate {
    let progress = snapshot.progress();
    let duration = snapshot.print_duration();
    let speed = snapshot.speed_multiplier();

    let file = file_remaining(progress, duration, speed);
    let slicer = snapshot
        .slice_estimated_seconds()
        .map(|total| remaining_from_total(total, duration, speed));
    let history = snapshot
        .history_total_seconds()
        .map(|total| remaining_from_total(total, duration, speed));

    let best = history
        .filter(|left| *left > 0.0)
        .or_else(|| slicer.filter(|left| *left > 0.0))
        .unwrap_or(file);
    let combined = slicer.map_or(file, |left| left.min(file));

    TimeEstimate {
        progress_percent: progress_percent(progress),
        file_remaining_seconds: file,
        slicer_remaining_seconds: slicer,
        history_remaining_seconds: history,
        best_remaining_seconds: best,
        combined_remaining_seconds: combined,
        eta_epoch_seconds: snapshot.now_epoch_seconds() + best,
    }
}

fn progress_percent(progress: f64) -> u8 {
    (progress * 100.0).floor().clamp(0.0, 100.0) as u8
}

fn file_remaining(progress: f64, duration: f64, speed: f64) -> f64 {
    if progress > 0.0 && duration > 0.0 {
        let projected_total = duration / progress;
        ((projected_total - duration) / speed).max(0.0)
    } else {
        0.0
    }
}

fn remaining_from_total(total: f64, duration: f64, speed: f64) -> f64 {
    ((total - duration) / speed).max(0.0)
}
