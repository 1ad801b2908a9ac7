//! Camera popup image source.

/// Image source for the camera popup.
///
/// While the popup is visible it shows the live stream; once hidden it falls
/// back to a static snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraView {
    stream_url: String,
    snapshot_url: String,
    visible: bool,
}

impl CameraView {
    /// Creates a hidden camera view.
    #[must_use]
    pub fn new(stream_url: impl Into<String>, snapshot_url: impl Into<String>) -> Self {
        Self {
            stream_url: stream_url.into(),
            snapshot_url: snapshot_url.into(),
            visible: false,
        }
    }

    /// Returns true while the popup is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// URL the popup image should currently load.
    #[must_use]
    pub fn source(&self) -> &str {
        if self.visible {
            &self.stream_url
        } else {
            &self.snapshot_url
        }
    }

    /// Shows the popup and returns the new image source.
    pub fn show(&mut self) -> &str {
        self.visible = true;
        self.source()
    }

    /// Hides the popup and returns the new image source.
    pub fn hide(&mut self) -> &str {
        self.visible = false;
        self.source()
    }

    /// Flips visibility, as a tray click does, and returns the new image source.
    pub fn toggle(&mut self) -> &str {
        self.visible = !self.visible;
        self.source()
    }

    /// Handles the popup losing focus. An attached inspector keeps it open.
    pub fn blur(&mut self, inspector_open: bool) -> &str {
        if !inspector_open {
            self.visible = false;
        }
        self.source()
    }
}
