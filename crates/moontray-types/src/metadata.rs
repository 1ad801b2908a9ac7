//! Gcode file metadata reported by `server/files/metadata`.

use serde::{Deserialize, Serialize};

/// Status string Moonraker records for a print that ran to completion.
const HISTORY_COMPLETED: &str = "completed";

/// Slicer metadata and print history for a single gcode file.
///
/// Every field is optional; files sliced by tools that do not emit a given
/// header simply leave it out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMetadata {
    /// Height of the first layer in millimetres.
    pub first_layer_height: Option<f64>,
    /// Height of every subsequent layer in millimetres.
    pub layer_height: Option<f64>,
    /// Total print duration estimated by the slicer, in seconds.
    pub estimated_time: Option<f64>,
    /// Number of layers in the file.
    pub layer_count: Option<u32>,
    /// Outcome of the most recent print of this file.
    pub history: Option<PrintHistory>,
}

/// Record of a previous print of a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintHistory {
    /// Job outcome (`completed`, `cancelled`, `error`, ...).
    pub status: Option<String>,
    /// Total duration of that job in seconds.
    pub total_duration: Option<f64>,
}

impl FileMetadata {
    /// Returns the total duration of a prior print that completed.
    ///
    /// Cancelled or failed runs are ignored since their duration says
    /// nothing about how long the whole file takes.
    #[must_use]
    pub fn completed_duration(&self) -> Option<f64> {
        let history = self.history.as_ref()?;
        if history.status.as_deref() == Some(HISTORY_COMPLETED) {
            history.total_duration
        } else {
            None
        }
    }
}
