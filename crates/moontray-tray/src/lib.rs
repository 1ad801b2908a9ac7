//! Tray title, menu and camera presentation for the moontray printer tray
//! companion.
//!
//! Nothing here draws pixels. Each type is a plain model a menu-bar host
//! renders:
//!
//! - [`TrayTitle`] - Title text for the current printer state
//! - [`humanize`] / [`format_eta`] - Duration and clock formatting
//! - [`MenuState`] / [`MenuItem`] - Menu model and xbar-format rendering
//! - [`CameraView`] - Stream/snapshot source switching for the camera popup

#![doc(issue_tracker_base_url = "https://github.com/moontray/moontray/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod camera;
mod humanize;
mod menu;
mod title;

pub use camera::CameraView;
pub use humanize::{format_eta, humanize};
pub use menu::{MenuAction, MenuItem, MenuState};
pub use title::{CONNECTING_TITLE, TrayTitle};
