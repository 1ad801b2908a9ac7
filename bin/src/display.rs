//! Rendering of monitor state for the terminal and menu-bar hosts.

use anyhow::{Context, Result};
use chrono::TimeZone;
use moontray_lib::prelude::*;

use crate::config::Config;

/// Tray title for the current state.
pub(crate) fn title<Tz>(state: &MonitorState, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    state.report().map_or_else(
        || CONNECTING_TITLE.to_string(),
        |report| {
            TrayTitle::new(&report.status, &report.estimate)
                .with_layer(report.layer)
                .render(tz)
        },
    )
}

/// Detail lines shown under the title.
pub(crate) fn details<Tz>(state: &MonitorState, tz: &Tz) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(report) = state.report() else {
        return vec!["Waiting for printer".to_string()];
    };

    let mut lines = vec![format!("State: {}", report.status.state.label())];
    if let Some(file) = report.status.loaded_file() {
        lines.push(format!("File: {file}"));
    }

    if report.status.state.is_active() {
        let estimate = &report.estimate;
        lines.push(format!("Progress: {}%", estimate.progress_percent));
        lines.push(format!("Layer: {}", report.layer));
        lines.push(format!(
            "Left (file): {}",
            humanize(estimate.file_remaining_seconds)
        ));
        if let Some(slicer) = estimate.slicer_remaining_seconds {
            lines.push(format!("Left (slicer): {}", humanize(slicer)));
        }
        if let Some(history) = estimate.history_remaining_seconds {
            lines.push(format!("Left (last run): {}", humanize(history)));
        }
        lines.push(format!("ETA: {}", format_eta(estimate.eta(), tz)));
    }

    lines.push(format!(
        "Extruder: {}  Bed: {}",
        temperature(report.status.extruder_temperature),
        temperature(report.status.bed_temperature),
    ));
    lines.push(format!(
        "Updated: {}",
        report.fetched_at.with_timezone(tz).format("%H:%M:%S")
    ));

    if let Some(error) = state.error() {
        lines.push(format!("Last poll failed: {error}"));
    }

    lines
}

/// Menu model for the current state.
pub(crate) fn menu_state<Tz>(state: &MonitorState, config: &Config, tz: &Tz) -> Result<MenuState>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut menu = MenuState::new(title(state, tz), config.printer.moonraker_url.clone());
    menu.details = details(state, tz);
    menu.camera = camera_view(config)?;
    Ok(menu)
}

/// Camera view for the configured camera, if any.
pub(crate) fn camera_view(config: &Config) -> Result<Option<CameraView>> {
    let Some(base) = config.printer.camera_url.as_deref() else {
        return Ok(None);
    };
    let urls = CameraUrls::new(base).context("Invalid camera URL")?;
    Ok(Some(CameraView::new(
        urls.stream().to_string(),
        urls.snapshot().to_string(),
    )))
}

fn temperature(value: Option<f64>) -> String {
    value.map_or_else(|| "--".to_string(), |t| format!("{t:.0}°C"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use moontray_lib::PrinterTelemetry;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap()
    }

    fn live(state: PrinterState) -> MonitorState {
        let poll = PrinterPoll {
            telemetry: PrinterTelemetry {
                status: PrinterStatus {
                    state,
                    filename: Some("benchy.gcode".to_string()),
                    extruder_temperature: Some(215.2),
                    bed_temperature: Some(60.0),
                    gcode_z: Some(0.5),
                },
                progress: Some(0.5),
                print_duration: Some(1_800.0),
                speed_factor: Some(1.0),
            },
            metadata: FileMetadata::default(),
        };
        MonitorState::Live(PrinterReport::from_poll(poll, now()))
    }

    #[test]
    fn test_connecting_title() {
        assert_eq!(title(&MonitorState::Connecting, &Utc), CONNECTING_TITLE);
        assert_eq!(
            details(&MonitorState::Connecting, &Utc),
            vec!["Waiting for printer"]
        );
    }

    #[test]
    fn test_printing_details() {
        let lines = details(&live(PrinterState::Printing), &Utc);
        assert_eq!(
            lines,
            vec![
                "State: Printing",
                "File: benchy.gcode",
                "Progress: 50%",
                "Layer: 1",
                "Left (file): 30 minutes",
                "ETA: 18:30",
                "Extruder: 215°C  Bed: 60°C",
                "Updated: 18:00:00",
            ]
        );
    }

    #[test]
    fn test_idle_details_skip_estimate() {
        let lines = details(&live(PrinterState::Standby), &Utc);
        assert!(!lines.iter().any(|line| line.starts_with("Progress")));
        assert_eq!(lines[0], "State: Standby");
    }

    #[test]
    fn test_stale_details_report_error() {
        let MonitorState::Live(report) = live(PrinterState::Printing) else {
            unreachable!()
        };
        let stale = MonitorState::Stale {
            report,
            error: "timed out".to_string(),
        };
        let lines = details(&stale, &Utc);
        assert_eq!(lines.last().unwrap(), "Last poll failed: timed out");
    }

    #[test]
    fn test_menu_with_camera() {
        let mut config = Config::default();
        config.printer.camera_url = Some("http://cam.local:8080".to_string());

        let menu = menu_state(&MonitorState::Connecting, &config, &Utc).unwrap();
        assert_eq!(menu.title, CONNECTING_TITLE);
        let camera = menu.camera.unwrap();
        assert_eq!(camera.source(), "http://cam.local:8080/?action=snapshot");
    }

    #[test]
    fn test_invalid_camera_url() {
        let mut config = Config::default();
        config.printer.camera_url = Some("ftp://cam.local".to_string());
        assert!(camera_view(&config).is_err());
    }
}
