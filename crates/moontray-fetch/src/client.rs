//! HTTP client for the Moonraker API.

use bytes::Bytes;
use moontray_types::FileMetadata;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::parse::{parse_metadata_response, parse_objects_response};
use crate::url::ApiUrls;
use crate::{PrinterPoll, PrinterTelemetry};

/// Configuration for the Moonraker client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // Must stay below the poll interval
            timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(2),
            user_agent: format!("moontray/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching telemetry.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Response body was not the expected JSON shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configured URL is unusable.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// HTTP client bound to a single Moonraker instance.
#[derive(Debug, Clone)]
pub struct MoonrakerClient {
    client: Client,
    urls: ApiUrls,
    config: ClientConfig,
}

impl MoonrakerClient {
    /// Creates a client for the Moonraker instance at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(base_url: &str, config: ClientConfig) -> Result<Self, FetchError> {
        let urls = ApiUrls::new(base_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            urls,
            config,
        })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn with_defaults(base_url: &str) -> Result<Self, FetchError> {
        Self::new(base_url, ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the API endpoints this client talks to.
    #[must_use]
    pub const fn urls(&self) -> &ApiUrls {
        &self.urls
    }

    /// Fetches the printer status objects.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or
    /// malformed JSON.
    pub async fn fetch_telemetry(&self) -> Result<PrinterTelemetry, FetchError> {
        let url = self.urls.objects_query()?;
        let body = self
            .get(url.clone())
            .await?
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND.as_u16(),
            })?;
        parse_objects_response(&body)
    }

    /// Fetches slicer metadata and history for a gcode file.
    ///
    /// A file unknown to the server (404) yields empty metadata.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or
    /// malformed JSON.
    pub async fn fetch_metadata(&self, filename: &str) -> Result<FileMetadata, FetchError> {
        let url = self.urls.file_metadata(filename)?;
        match self.get(url).await? {
            Some(body) => parse_metadata_response(&body),
            None => {
                warn!(filename, "File metadata not found");
                Ok(FileMetadata::default())
            }
        }
    }

    /// Fetches telemetry and, when a file is loaded, its metadata.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered by either request.
    pub async fn poll(&self) -> Result<PrinterPoll, FetchError> {
        let telemetry = self.fetch_telemetry().await?;
        let metadata = match telemetry.status.loaded_file() {
            Some(filename) => self.fetch_metadata(filename).await?,
            None => FileMetadata::default(),
        };
        Ok(PrinterPoll {
            telemetry,
            metadata,
        })
    }

    /// Downloads a single camera frame.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    pub async fn fetch_image(&self, url: &Url) -> Result<Bytes, FetchError> {
        self.get(url.clone())
            .await?
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND.as_u16(),
            })
    }

    /// Issues a GET request, returning `Ok(None)` on 404.
    async fn get(&self, url: Url) -> Result<Option<Bytes>, FetchError> {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(Some(response.bytes().await?))
    }
}
