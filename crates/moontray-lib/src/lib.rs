//! Moonraker printer tray companion with print-time estimation.
//!
//! This is a facade crate that re-exports functionality from the moontray
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use moontray_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MoonrakerClient::with_defaults("http://printer.local")?;
//!     let monitor = Monitor::new(client);
//!
//!     let report = monitor.poll_once().await?;
//!     println!("{}", TrayTitle::new(&report.status, &report.estimate).render(&chrono::Local));
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/moontray/moontray/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use moontray_types::*;

// Re-export the estimator
pub use moontray_estimate::{LayerProgress, current_layer, estimate};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use moontray_fetch::{
    ClientConfig, FetchError, MoonrakerClient, PrinterPoll, PrinterTelemetry,
    parse_metadata_response, parse_objects_response,
    url::{ApiUrls, CameraUrls},
};

// Re-export the poll loop
#[cfg(feature = "monitor")]
pub use moontray_monitor::{
    DEFAULT_POLL_INTERVAL, Monitor, MonitorState, PrinterReport, TelemetrySource,
};

// Re-export presentation
#[cfg(feature = "tray")]
pub use moontray_tray::{
    CONNECTING_TITLE, CameraView, MenuAction, MenuItem, MenuState, TrayTitle, format_eta,
    humanize,
};

/// Prelude module for convenient imports.
///
/// ```
/// use moontray_lib::prelude::*;
/// ```
pub mod prelude {
    pub use moontray_types::{
        FileMetadata, PrinterState, PrinterStatus, TelemetrySnapshot, TimeEstimate,
    };

    pub use moontray_estimate::{LayerProgress, estimate};

    #[cfg(feature = "fetch")]
    pub use moontray_fetch::{
        ClientConfig, FetchError, MoonrakerClient, PrinterPoll,
        url::{ApiUrls, CameraUrls},
    };

    #[cfg(feature = "monitor")]
    pub use moontray_monitor::{
        DEFAULT_POLL_INTERVAL, Monitor, MonitorState, PrinterReport, TelemetrySource,
    };

    #[cfg(feature = "tray")]
    pub use moontray_tray::{
        CONNECTING_TITLE, CameraView, MenuAction, MenuItem, MenuState, TrayTitle, format_eta,
        humanize,
    };
}
