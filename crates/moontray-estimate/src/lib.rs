//! Print time and layer estimation for the moontray printer tray companion.
//!
//! Everything in this crate is pure arithmetic over a single poll's data:
//!
//! - [`estimate`] - Maps a [`TelemetrySnapshot`] to a [`TimeEstimate`]
//! - [`current_layer`] - Derives the layer being printed from the Z position
//! - [`LayerProgress`] - Current layer paired with the file's layer count
//!
//! [`TelemetrySnapshot`]: moontray_types::TelemetrySnapshot
//! [`TimeEstimate`]: moontray_types::TimeEstimate

#![doc(issue_tracker_base_url = "https://github.com/moontray/moontray/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod layer;

pub use estimator::estimate;
pub use layer::{LayerProgress, current_layer};
