//! Offline estimate from command-line values.

use chrono::{Local, Utc};
use moontray_lib::prelude::*;

/// Runs the estimator on the given values and prints every figure.
pub(crate) fn estimate_offline(
    progress: f64,
    duration: f64,
    speed: f64,
    slicer: Option<f64>,
    history: Option<f64>,
) {
    let snapshot = TelemetrySnapshot::at(progress, duration, speed, Utc::now())
        .with_slicer_estimate(slicer)
        .with_completed_history(history);
    let estimate = estimate(&snapshot);

    println!("Progress:        {}%", estimate.progress_percent);
    println!(
        "Left (file):     {}",
        describe(estimate.file_remaining_seconds)
    );
    if let Some(seconds) = estimate.slicer_remaining_seconds {
        println!("Left (slicer):   {}", describe(seconds));
    }
    if let Some(seconds) = estimate.history_remaining_seconds {
        println!("Left (last run): {}", describe(seconds));
    }
    println!(
        "Best:            {}",
        describe(estimate.best_remaining_seconds)
    );
    println!(
        "Combined:        {}",
        describe(estimate.combined_remaining_seconds)
    );
    println!("ETA:             {}", format_eta(estimate.eta(), &Local));
}

fn describe(seconds: f64) -> String {
    format!("{} ({seconds:.0}s)", humanize(seconds))
}
