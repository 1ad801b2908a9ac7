//! Tray title text.

use chrono::TimeZone;
use moontray_estimate::LayerProgress;
use moontray_types::{PrinterState, PrinterStatus, TimeEstimate};

use crate::humanize::{format_eta, humanize};

/// Title shown until the first poll succeeds.
pub const CONNECTING_TITLE: &str = "Connecting...";

/// Everything the tray title is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct TrayTitle<'a> {
    status: &'a PrinterStatus,
    estimate: &'a TimeEstimate,
    layer: Option<LayerProgress>,
}

impl<'a> TrayTitle<'a> {
    /// Creates a title for the given status and estimate.
    #[must_use]
    pub const fn new(status: &'a PrinterStatus, estimate: &'a TimeEstimate) -> Self {
        Self {
            status,
            estimate,
            layer: None,
        }
    }

    /// Adds layer progress, shown while paused when the layer count is known.
    #[must_use]
    pub const fn with_layer(mut self, layer: LayerProgress) -> Self {
        self.layer = Some(layer);
        self
    }

    /// Renders the title, formatting the ETA in the given time zone.
    ///
    /// - printing: `Printing [42%] Left: 2 hours ETA: 21:05`
    /// - paused: `Paused at 42%`, plus ` L:12/120` when the layer count is known
    /// - standby, complete, cancelled: `Standby E:24°C, B:23°C`
    /// - error: `Error`
    #[must_use]
    pub fn render<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let progress = self.estimate.progress_percent;
        match &self.status.state {
            PrinterState::Printing => format!(
                "Printing [{progress}%] Left: {} ETA: {}",
                humanize(self.estimate.combined_remaining_seconds),
                format_eta(self.estimate.eta(), tz),
            ),
            PrinterState::Paused => match self.layer {
                Some(layer) if layer.total.is_some() => {
                    format!("Paused at {progress}% L:{layer}")
                }
                _ => format!("Paused at {progress}%"),
            },
            PrinterState::Standby | PrinterState::Complete | PrinterState::Cancelled => {
                format!("{} {}", self.status.state.label(), self.temperatures())
            }
            PrinterState::Error => "Error".to_string(),
            PrinterState::Unknown(_) => self.status.state.label(),
        }
    }

    /// `E:215°C, B:60°C`, with `--` for a missing reading.
    fn temperatures(&self) -> String {
        format!(
            "E:{}°C, B:{}°C",
            format_temperature(self.status.extruder_temperature),
            format_temperature(self.status.bed_temperature),
        )
    }
}

fn format_temperature(temperature: Option<f64>) -> String {
    match temperature {
        Some(t) if t.is_finite() => format!("{}", t.round() as i64),
        _ => "--".to_string(),
    }
}
