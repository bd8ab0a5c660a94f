//! Configuration loading and management.
//!
//! Settings come from, in increasing priority: built-in defaults, a
//! `doctext.toml` file (explicit path or discovered by walking up from the
//! working directory), and `DOCTEXT_*` environment variables.
//!
//! ```toml
//! [fetch]
//! timeout_secs = 30
//! user_agent = "Mozilla/5.0"
//! max_download_bytes = 104857600
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//! cors_origins = ["https://app.example.com"]
//! max_request_body_bytes = 1048576
//! ```

use crate::{DoctextError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the file [`DoctextConfig::discover`] looks for.
pub const CONFIG_FILE_NAME: &str = "doctext.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctextConfig {
    pub fetch: FetchConfig,
    pub server: ServerConfig,
}

/// Remote document retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,

    /// Sent as `User-Agent` on every request.
    pub user_agent: String,

    /// Downloads larger than this fail with `FetchFailed`.
    pub max_download_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "Mozilla/5.0".to_string(),
            max_download_bytes: 100 * 1024 * 1024,
        }
    }
}

/// HTTP service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,

    /// Request bodies are small JSON objects.
    pub max_request_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors_origins: Vec::new(),
            max_request_body_bytes: 1024 * 1024,
        }
    }
}

impl DoctextConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `DoctextError::Validation` if the file doesn't exist or is invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DoctextError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| DoctextError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Discover `doctext.toml` in the current directory or any parent.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(DoctextError::Io)?;

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered config file");
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Explicit file if given, otherwise discovery, otherwise defaults; then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::discover()?.unwrap_or_default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `DOCTEXT_*` environment variables on top of the current values.
    ///
    /// | Variable | Field |
    /// |---|---|
    /// | `DOCTEXT_HOST` | `server.host` |
    /// | `DOCTEXT_PORT` | `server.port` |
    /// | `DOCTEXT_CORS_ORIGINS` | `server.cors_origins` (comma-separated) |
    /// | `DOCTEXT_FETCH_TIMEOUT_SECS` | `fetch.timeout_secs` |
    /// | `DOCTEXT_MAX_DOWNLOAD_BYTES` | `fetch.max_download_bytes` |
    ///
    /// Values that do not parse are logged and ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("DOCTEXT_HOST")
            && !host.trim().is_empty()
        {
            self.server.host = host.trim().to_string();
        }

        if let Some(port) = parse_env::<u16>("DOCTEXT_PORT") {
            self.server.port = port;
        }

        if let Ok(origins) = std::env::var("DOCTEXT_CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(timeout) = parse_env::<u64>("DOCTEXT_FETCH_TIMEOUT_SECS") {
            self.fetch.timeout_secs = timeout;
        }

        if let Some(limit) = parse_env::<u64>("DOCTEXT_MAX_DOWNLOAD_BYTES") {
            self.fetch.max_download_bytes = limit;
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    let value = std::env::var(name).ok()?;
    match value.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("Failed to parse {}='{}': {}; keeping configured value", name, value, e);
            None
        }
    }
}
