//! Client configuration.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding `server_url`.
pub const SERVER_URL_ENV: &str = "TICTACTOE_SERVER_URL";

/// Configuration for the tic-tac-toe client.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ClientConfig {
    /// WebSocket URL of the matchmaking server.
    #[serde(default = "default_server_url")]
    server_url: String,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_server_url() -> String {
    "ws://127.0.0.1:3000/ws".to_string()
}

fn default_log_filter() -> String {
    "info,tictactoe_online=debug".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            log_filter: default_log_filter(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(server_url = %config.server_url, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise, then applies the
    /// environment override.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = if path.as_ref().exists() {
            Self::from_file(path)?
        } else {
            debug!("Config file not found, using defaults");
            Self::default()
        };

        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            info!(server_url = %url, "Server URL overridden from environment");
            config.server_url = url;
        }
        Ok(config)
    }

    /// Replaces the server URL, e.g. from the command line.
    #[must_use]
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }
}
