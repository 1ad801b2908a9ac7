//! Core types for the moontray printer tray companion.
//!
//! This crate provides the data structures shared across the workspace:
//!
//! - [`TelemetrySnapshot`] - Validated, immutable telemetry for one poll cycle
//! - [`TimeEstimate`] - Remaining-time figures derived from a snapshot
//! - [`PrinterState`] - Print job state reported by the host
//! - [`PrinterStatus`] - Non-timing telemetry (temperatures, file, position)
//! - [`FileMetadata`] - Slicer metadata and print history for a gcode file

#![doc(issue_tracker_base_url = "https://github.com/moontray/moontray/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimate;
mod metadata;
mod printer;
mod snapshot;

pub use estimate::TimeEstimate;
pub use metadata::{FileMetadata, PrintHistory};
pub use printer::{PrinterState, PrinterStatus};
pub use snapshot::TelemetrySnapshot;
