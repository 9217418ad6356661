//! Runtime configuration for the composition root.
//!
//! Settings come from defaults, an optional JSON file and `TODO_MVI_*`
//! environment variables, applied in that order.

use std::io;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the local data directory.
pub const DATA_DIR_ENV: &str = "TODO_MVI_DATA_DIR";
/// Environment variable overriding the simulated remote latency.
pub const REMOTE_LATENCY_ENV: &str = "TODO_MVI_REMOTE_LATENCY_MS";
/// Environment variable overriding the notification delay.
pub const NOTIFICATION_DELAY_ENV: &str = "TODO_MVI_NOTIFICATION_DELAY_MS";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration path does not name a file.
    #[error("configuration path {0} has no file name")]
    InvalidPath(Utf8PathBuf),

    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Read {
        /// File that was read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`TodoConfig`].
    #[error("failed to parse configuration {path}: {source}")]
    Parse {
        /// File that was parsed.
        path: Utf8PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// An environment override holds an unusable value.
    #[error("invalid value {value:?} for {key}")]
    InvalidOverride {
        /// Variable name.
        key: &'static str,
        /// Value found.
        value: String,
    },
}

/// Settings for wiring the task store and the screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TodoConfig {
    /// Directory holding the local task document. `None` keeps local tasks
    /// in memory.
    pub data_dir: Option<Utf8PathBuf>,
    /// Latency of the simulated remote source, in milliseconds.
    pub remote_latency_ms: u64,
    /// Delay before a transient confirmation is hidden, in milliseconds.
    pub notification_delay_ms: u64,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            remote_latency_ms: 5_000,
            notification_delay_ms: 2_000,
        }
    }
}

impl TodoConfig {
    /// Creates a configuration with no simulated latency and no
    /// notification delay.
    ///
    /// Useful for tests and scripted demos.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            data_dir: None,
            remote_latency_ms: 0,
            notification_delay_ms: 0,
        }
    }

    /// Latency of the simulated remote source.
    #[must_use]
    pub const fn remote_latency(&self) -> Duration {
        Duration::from_millis(self.remote_latency_ms)
    }

    /// Delay before a transient confirmation is hidden.
    #[must_use]
    pub const fn notification_delay(&self) -> Duration {
        Duration::from_millis(self.notification_delay_ms)
    }

    /// Loads the optional file at `path`, then applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or an
    /// override is invalid.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(file) => Self::from_json_file(file)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Reads a configuration file. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`] on failure.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::InvalidPath(path.to_owned()))?;
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let read_error = |source| ConfigError::Read {
            path: path.to_owned(),
            source,
        };

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let contents = dir.read_to_string(file_name).map_err(read_error)?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Applies `TODO_MVI_*` overrides found through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] when a numeric override does
    /// not parse.
    pub fn with_overrides(
        self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(Utf8PathBuf::from)
            .or(self.data_dir);
        let remote_latency_ms = parse_millis(&lookup, REMOTE_LATENCY_ENV)?
            .unwrap_or(self.remote_latency_ms);
        let notification_delay_ms = parse_millis(&lookup, NOTIFICATION_DELAY_ENV)?
            .unwrap_or(self.notification_delay_ms);

        Ok(Self {
            data_dir,
            remote_latency_ms,
            notification_delay_ms,
        })
    }
}

fn parse_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u64>, ConfigError> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidOverride { key, value: value.clone() })
        })
        .transpose()
}
