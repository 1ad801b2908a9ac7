//! Benchmark fixtures for moontray.

use chrono::{DateTime, TimeZone, Utc};
use moontray_lib::{TelemetrySnapshot, PrinterState, PrinterStatus};

/// A recorded `printer/objects/query` response from a printer mid-print.
pub const OBJECTS_RESPONSE: &str = r#"{
  "result": {
    "eventtime": 1234.56,
    "status": {
      "heater_bed": {"temperature": 59.98, "target": 60.0, "power": 0.31},
      "extruder": {"temperature": 214.87, "target": 215.0, "power": 0.52},
      "virtual_sdcard": {"progress": 0.4213, "is_active": true, "file_position": 1048576},
      "print_stats": {"state": "printing", "filename": "benchy.gcode", "print_duration": 2520.4},
      "gcode_move": {"speed_factor": 1.0, "gcode_position": [110.2, 95.4, 12.4, 3021.7]}
    }
  }
}"#;

/// Fixed wall clock for reproducible fixtures.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Snapshots covering each estimator branch.
#[must_use]
pub fn snapshot_cases() -> Vec<(&'static str, TelemetrySnapshot)> {
    let now = fixed_now();
    vec![
        ("idle", TelemetrySnapshot::at(0.0, 0.0, 1.0, now)),
        ("file-only", TelemetrySnapshot::at(0.42, 2_520.0, 1.0, now)),
        (
            "slicer",
            TelemetrySnapshot::at(0.42, 2_520.0, 1.25, now).with_slicer_estimate(Some(6_400.0)),
        ),
        (
            "history",
            TelemetrySnapshot::at(0.42, 2_520.0, 1.0, now)
                .with_slicer_estimate(Some(6_400.0))
                .with_completed_history(Some(6_050.0)),
        ),
    ]
}

/// Printer status matching [`OBJECTS_RESPONSE`].
#[must_use]
pub fn printing_status() -> PrinterStatus {
    PrinterStatus {
        state: PrinterState::Printing,
        filename: Some("benchy.gcode".to_string()),
        extruder_temperature: Some(214.87),
        bed_temperature: Some(59.98),
        gcode_z: Some(12.4),
    }
}
