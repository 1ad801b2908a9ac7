//! Poll loop publishing printer reports.

use std::time::Duration;

use chrono::Utc;
use moontray_fetch::FetchError;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::{MonitorState, PrinterReport, TelemetrySource};

/// Default time between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Polls a [`TelemetrySource`] and publishes the latest [`MonitorState`].
///
/// Readers subscribe through [`Monitor::subscribe`] and always observe the
/// most recent state; intermediate states they did not get to are dropped.
#[derive(Debug)]
pub struct Monitor<S> {
    source: S,
    state: watch::Sender<MonitorState>,
}

impl<S: TelemetrySource> Monitor<S> {
    /// Creates a monitor in the [`MonitorState::Connecting`] state.
    #[must_use]
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(MonitorState::Connecting);
        Self { source, state }
    }

    /// Returns the underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<MonitorState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> MonitorState {
        self.state.borrow().clone()
    }

    /// Runs a single poll and publishes the outcome.
    ///
    /// On failure the previously published report is kept and marked stale.
    ///
    /// # Errors
    ///
    /// Returns the fetch error after publishing the stale state.
    pub async fn poll_once(&self) -> Result<PrinterReport, FetchError> {
        match self.source.poll().await {
            Ok(poll) => {
                let report = PrinterReport::from_poll(poll, Utc::now());
                debug!(
                    state = %report.status.state,
                    progress = report.estimate.progress_percent,
                    remaining = report.estimate.best_remaining_seconds,
                    "Poll succeeded"
                );
                self.state.send_replace(MonitorState::Live(report.clone()));
                Ok(report)
            }
            Err(err) => {
                let message = err.to_string();
                self.state.send_modify(|state| {
                    *state = std::mem::take(state).into_failed(message);
                });
                Err(err)
            }
        }
    }

    /// Polls every `interval` until `shutdown` turns true or its sender is
    /// dropped.
    ///
    /// The first poll runs immediately. Ticks missed while a slow poll is in
    /// flight are skipped rather than queued.
    pub async fn run(&self, interval: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(interval_ms = interval.as_millis(), "Monitor started");

        loop {
            if *shutdown.borrow() {
                break;
            }
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(err) = self.poll_once().await {
                        warn!(error = %err, "Poll failed");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        info!("Monitor stopped");
    }
}
