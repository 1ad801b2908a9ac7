//! Moonraker HTTP client and telemetry mapping for the moontray printer tray
//! companion.
//!
//! This crate owns everything between the wire and the estimator:
//!
//! - [`url::ApiUrls`] / [`url::CameraUrls`] - Endpoint construction
//! - [`MoonrakerClient`] - HTTP client for telemetry, file metadata and camera snapshots
//! - [`parse_objects_response`] / [`parse_metadata_response`] - JSON mapping
//! - [`PrinterPoll`] - One poll's worth of validated telemetry, convertible into a
//!   [`TelemetrySnapshot`](moontray_types::TelemetrySnapshot)

#![doc(issue_tracker_base_url = "https://github.com/moontray/moontray/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod parse;
mod poll;
pub mod url;

pub use client::{ClientConfig, FetchError, MoonrakerClient};
pub use parse::{PrinterTelemetry, parse_metadata_response, parse_objects_response};
pub use poll::PrinterPoll;
