//! Client configuration loaded via OrthoConfig.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

fn default_token_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".courtside")
        .join("token")
}

/// Configuration values controlling backend access.
///
/// Values layer from environment (`COURTSIDE_` prefix) and configuration
/// file; unset values fall back through the accessor methods. The command
/// surface itself is clap's concern, so settings are loaded without
/// consuming command-line arguments.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COURTSIDE")]
pub struct ClientSettings {
    /// Base URL of the REST backend.
    pub api_base_url: Option<String>,
    /// Request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Override for the persisted-token file path.
    pub token_path: Option<PathBuf>,
}

impl ClientSettings {
    /// Load settings from environment and file layers only.
    ///
    /// # Errors
    ///
    /// Returns an error when a configuration layer cannot be parsed.
    pub fn load() -> ortho_config::OrthoResult<Self> {
        Self::load_from_iter([OsString::from("courtside")])
    }

    /// Return the configured base URL, falling back to the default.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Return the configured request timeout, falling back to the default.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Return the configured token path, falling back to the default.
    pub fn token_path(&self) -> PathBuf {
        self.token_path.clone().unwrap_or_else(default_token_path)
    }
}
