use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use moontray_fetch::{FetchError, PrinterPoll, PrinterTelemetry};
use moontray_monitor::{Monitor, MonitorState, TelemetrySource};
use moontray_types::{FileMetadata, PrinterState, PrinterStatus};

/// Replays a fixed sequence of poll outcomes.
struct ScriptedSource {
    outcomes: Mutex<VecDeque<Result<PrinterPoll, FetchError>>>,
}

impl ScriptedSource {
    fn new(outcomes: Vec<Result<PrinterPoll, FetchError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
        }
    }
}

#[async_trait]
impl TelemetrySource for ScriptedSource {
    async fn poll(&self) -> Result<PrinterPoll, FetchError> {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unavailable()))
    }
}

fn unavailable() -> FetchError {
    FetchError::Status {
        url: "http://printer.local/printer/objects/query".to_string(),
        status: 503,
    }
}

fn printing(progress: f64, duration: f64) -> PrinterPoll {
    PrinterPoll {
        telemetry: PrinterTelemetry {
            status: PrinterStatus {
                state: PrinterState::Printing,
                filename: Some("benchy.gcode".to_string()),
                extruder_temperature: Some(215.0),
                bed_temperature: Some(60.0),
                gcode_z: Some(1.0),
            },
            progress: Some(progress),
            print_duration: Some(duration),
            speed_factor: Some(1.0),
        },
        metadata: FileMetadata {
            estimated_time: Some(3_000.0),
            ..FileMetadata::default()
        },
    }
}

#[tokio::test]
async fn monitor_keeps_last_report_on_failure() {
    let source = ScriptedSource::new(vec![
        Err(unavailable()),
        Ok(printing(0.25, 600.0)),
        Err(unavailable()),
        Ok(printing(0.5, 1_200.0)),
    ]);
    let monitor = Monitor::new(source);

    // Failure before any success: still connecting.
    assert!(monitor.poll_once().await.is_err());
    assert_eq!(monitor.state(), MonitorState::Connecting);

    let first = monitor.poll_once().await.unwrap();
    assert_eq!(first.estimate.progress_percent, 25);
    assert_eq!(first.estimate.file_remaining_seconds, 1_800.0);
    assert_eq!(first.estimate.slicer_remaining_seconds, Some(2_400.0));
    assert_eq!(monitor.state(), MonitorState::Live(first.clone()));

    // Failure after success: stale but the estimate survives untouched.
    let err = monitor.poll_once().await.unwrap_err();
    let state = monitor.state();
    assert!(state.is_stale());
    assert_eq!(state.report(), Some(&first));
    assert_eq!(state.error(), Some(err.to_string().as_str()));

    // Recovery replaces the stale report.
    let second = monitor.poll_once().await.unwrap();
    assert_eq!(second.estimate.progress_percent, 50);
    assert_eq!(monitor.state(), MonitorState::Live(second));
}

#[tokio::test]
async fn subscribers_observe_latest_state() {
    let source = ScriptedSource::new(vec![Ok(printing(0.1, 60.0)), Ok(printing(0.2, 120.0))]);
    let monitor = Monitor::new(source);
    let mut rx = monitor.subscribe();

    monitor.poll_once().await.unwrap();
    let latest = monitor.poll_once().await.unwrap();

    // Only the most recent report is visible.
    let state = rx.borrow_and_update().clone();
    assert_eq!(state, MonitorState::Live(latest));
    assert!(!rx.has_changed().unwrap());
}
