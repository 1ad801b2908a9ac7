//! Configuration file handling.

use directories::ProjectDirs;
use moontray_lib::{ClientConfig, DEFAULT_POLL_INTERVAL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub(crate) const DEFAULT_MOONRAKER_URL: &str = "http://localhost:7125";
pub(crate) const DEFAULT_LOG_LEVEL: &str = "warn";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Effective configuration: file contents with CLI overrides applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) printer: PrinterSection,
    pub(crate) poll: PollSection,
    pub(crate) logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PrinterSection {
    /// Moonraker API base URL, also opened as the printer UI.
    pub(crate) moonraker_url: String,
    /// mjpg-streamer base URL.
    pub(crate) camera_url: Option<String>,
}

impl Default for PrinterSection {
    fn default() -> Self {
        Self {
            moonraker_url: DEFAULT_MOONRAKER_URL.to_string(),
            camera_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PollSection {
    /// Seconds between polls.
    pub(crate) interval_secs: u64,
    /// Per-request timeout in seconds.
    pub(crate) timeout_secs: u64,
}

impl Default for PollSection {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            interval_secs: DEFAULT_POLL_INTERVAL.as_secs(),
            timeout_secs: client.timeout.as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct LoggingSection {
    /// `tracing` filter directive, overridden by `RUST_LOG` and `-v`.
    pub(crate) level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values given on the command line, taking precedence over the file.
#[derive(Debug, Clone, Default)]
pub(crate) struct Overrides {
    pub(crate) moonraker_url: Option<String>,
    pub(crate) camera_url: Option<String>,
    pub(crate) interval_secs: Option<u64>,
}

/// Platform config file location, e.g. `~/.config/moontray/config.toml` on Linux.
pub(crate) fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "moontray").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Reads and parses a config file.
pub(crate) fn load_from_path(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the config from an explicit path, or from the default location.
///
/// An explicit path must exist. A missing file at the default location
/// yields the defaults.
pub(crate) fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }
    match default_path() {
        Some(path) if path.exists() => load_from_path(path),
        _ => Ok(Config::default()),
    }
}

impl Config {
    /// Applies command-line overrides.
    pub(crate) fn apply(&mut self, overrides: Overrides) {
        if let Some(url) = overrides.moonraker_url {
            self.printer.moonraker_url = url;
        }
        if let Some(url) = overrides.camera_url {
            self.printer.camera_url = Some(url);
        }
        if let Some(secs) = overrides.interval_secs {
            self.poll.interval_secs = secs;
        }
    }

    /// Poll interval, never shorter than one second.
    pub(crate) fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll.interval_secs.max(1))
    }

    /// HTTP client settings derived from the `[poll]` section.
    pub(crate) fn client_config(&self) -> ClientConfig {
        let timeout = Duration::from_secs(self.poll.timeout_secs.max(1));
        ClientConfig {
            timeout,
            connect_timeout: timeout,
            ..ClientConfig::default()
        }
    }
}
