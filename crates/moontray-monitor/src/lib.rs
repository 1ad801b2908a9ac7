//! Printer poll loop for the moontray printer tray companion.
//!
//! Each poll fetches telemetry, builds a fresh snapshot, runs the estimator
//! and publishes the result on a watch channel:
//!
//! - [`TelemetrySource`] - Where poll data comes from (Moonraker or a mock)
//! - [`PrinterReport`] - Everything derived from one successful poll
//! - [`MonitorState`] - Connecting, live, or stale after a failed poll
//! - [`Monitor`] - Drives polls and publishes [`MonitorState`]

#![doc(issue_tracker_base_url = "https://github.com/moontray/moontray/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod monitor;
mod report;
mod source;

pub use monitor::{DEFAULT_POLL_INTERVAL, Monitor};
pub use report::{MonitorState, PrinterReport};
pub use source::TelemetrySource;
