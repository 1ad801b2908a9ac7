//! Moonraker and camera URL construction.

use reqwest::Url;

use crate::FetchError;

/// Printer objects polled on every cycle.
pub const QUERIED_OBJECTS: &str = "heater_bed&extruder&virtual_sdcard&print_stats&gcode_move";

/// Parses a base URL and ensures it ends with `/` so relative joins append.
fn parse_base(raw: &str) -> Result<Url, FetchError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

fn join(base: &Url, path: &str) -> Result<Url, FetchError> {
    base.join(path).map_err(|e| FetchError::InvalidUrl {
        url: format!("{base}{path}"),
        reason: e.to_string(),
    })
}

/// Endpoints of a Moonraker API server.
///
/// # Example
///
/// ```
/// use moontray_fetch::url::ApiUrls;
///
/// let urls = ApiUrls::new("http://printer.local:7125").unwrap();
/// assert_eq!(
///     urls.objects_query().unwrap().as_str(),
///     "http://printer.local:7125/printer/objects/query?heater_bed&extruder&virtual_sdcard&print_stats&gcode_move"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    base: Url,
}

impl ApiUrls {
    /// Validates the Moonraker base URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the URL cannot be parsed or is not
    /// `http`/`https`.
    pub fn new(base: &str) -> Result<Self, FetchError> {
        Ok(Self {
            base: parse_base(base)?,
        })
    }

    /// Returns the base URL, which also serves the printer's web interface.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// URL querying the status objects the tray needs.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the path cannot be joined.
    pub fn objects_query(&self) -> Result<Url, FetchError> {
        let mut url = join(&self.base, "printer/objects/query")?;
        url.set_query(Some(QUERIED_OBJECTS));
        Ok(url)
    }

    /// URL of the metadata for a gcode file, with the filename query-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the path cannot be joined.
    pub fn file_metadata(&self, filename: &str) -> Result<Url, FetchError> {
        let mut url = join(&self.base, "server/files/metadata")?;
        url.query_pairs_mut().append_pair("filename", filename);
        Ok(url)
    }
}

/// Stream and snapshot URLs of an mjpg-streamer style camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraUrls {
    stream: Url,
    snapshot: Url,
}

impl CameraUrls {
    /// Builds the camera URLs from its base URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the URL cannot be parsed or is not
    /// `http`/`https`.
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let base = parse_base(base)?;

        let mut stream = base.clone();
        stream.set_query(Some("action=stream"));
        let mut snapshot = base;
        snapshot.set_query(Some("action=snapshot"));

        Ok(Self { stream, snapshot })
    }

    /// Live MJPEG stream URL.
    #[must_use]
    pub const fn stream(&self) -> &Url {
        &self.stream
    }

    /// Single-frame snapshot URL.
    #[must_use]
    pub const fn snapshot(&self) -> &Url {
        &self.snapshot
    }
}
