//! Printer state and non-timing telemetry.

use serde::{Deserialize, Serialize};

/// Print job state as reported by `print_stats.state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrinterState {
    /// A print is in progress.
    Printing,
    /// The current print is paused.
    Paused,
    /// Idle, no job loaded.
    #[default]
    Standby,
    /// The last print finished successfully.
    Complete,
    /// The host reported an error.
    Error,
    /// The last print was cancelled.
    Cancelled,
    /// Any state string this crate does not know about.
    Unknown(String),
}

impl PrinterState {
    /// Parses a raw state string. Unrecognized values map to [`Self::Unknown`].
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "printing" => Self::Printing,
            "paused" => Self::Paused,
            "standby" => Self::Standby,
            "complete" => Self::Complete,
            "error" => Self::Error,
            "cancelled" => Self::Cancelled,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    /// Returns the state as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Printing => "printing",
            Self::Paused => "paused",
            Self::Standby => "standby",
            Self::Complete => "complete",
            Self::Error => "error",
            Self::Cancelled => "cancelled",
            Self::Unknown(raw) => raw,
        }
    }

    /// Returns the capitalized label used in titles and menus.
    #[must_use]
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Returns true while a job is loaded (printing or paused).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Printing | Self::Paused)
    }
}

impl From<String> for PrinterState {
    fn from(raw: String) -> Self {
        Self::from_raw(&raw)
    }
}

impl From<PrinterState> for String {
    fn from(state: PrinterState) -> Self {
        state.as_str().to_string()
    }
}

impl std::fmt::Display for PrinterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Printer telemetry that does not feed the estimator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrinterStatus {
    /// Current job state.
    pub state: PrinterState,
    /// File currently loaded, if any.
    pub filename: Option<String>,
    /// Extruder temperature in degrees Celsius.
    pub extruder_temperature: Option<f64>,
    /// Heated bed temperature in degrees Celsius.
    pub bed_temperature: Option<f64>,
    /// Z coordinate of the last gcode move.
    pub gcode_z: Option<f64>,
}

impl PrinterStatus {
    /// Returns the loaded filename, ignoring empty strings.
    #[must_use]
    pub fn loaded_file(&self) -> Option<&str> {
        self.filename.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_known_states() {
        assert_eq!(PrinterState::from_raw("printing"), PrinterState::Printing);
        assert_eq!(PrinterState::from_raw("Paused"), PrinterState::Paused);
        assert_eq!(PrinterState::from_raw("cancelled"), PrinterState::Cancelled);
    }

    #[test]
    fn test_from_raw_unknown_state_keeps_text() {
        let state = PrinterState::from_raw("startup");
        assert_eq!(state, PrinterState::Unknown("startup".to_string()));
        assert_eq!(state.as_str(), "startup");
    }

    #[test]
    fn test_label_capitalizes() {
        assert_eq!(PrinterState::Complete.label(), "Complete");
        assert_eq!(PrinterState::Unknown(String::new()).label(), "");
    }

    #[test]
    fn test_state_serde_round_trip_through_string() {
        let state: PrinterState = serde_json::from_str("\"standby\"").unwrap();
        assert_eq!(state, PrinterState::Standby);
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"standby\"");
    }

    #[test]
    fn test_loaded_file_ignores_empty() {
        let status = PrinterStatus {
            filename: Some(String::new()),
            ..PrinterStatus::default()
        };
        assert_eq!(status.loaded_file(), None);
    }
}
