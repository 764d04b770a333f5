//! Service configuration.
//!
//! Loaded from an optional TOML file with environment overrides. Every
//! section falls back to defaults, so a bare `fleetgate` with only
//! `DATABASE_URL` set is a valid deployment.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CoreError, Result};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "fleetgate.toml";

/// Top-level configuration for the fleetgate service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    pub server: ServerSection,
    pub store: StoreSection,
    pub analytics: AnalyticsSection,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Backing store settings.
///
/// Handed to the query executor at construction; there is no process-global
/// connection state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub database_url: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/fleet".to_string(),
        }
    }
}

/// Stale-read refresh settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsSection {
    /// Maximum acceptable age of the daily summary, in seconds, before a
    /// read triggers regeneration.
    pub staleness_threshold_secs: u64,
}

impl Default for AnalyticsSection {
    fn default() -> Self {
        Self {
            staleness_threshold_secs: 300,
        }
    }
}

impl FleetConfig {
    /// Load configuration from a TOML file, then apply environment
    /// overrides.
    ///
    /// With no explicit path, `fleetgate.toml` is read if present and
    /// silently skipped otherwise. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| CoreError::config(format!("invalid TOML in {}: {e}", path.display())))
    }

    /// `DATABASE_URL` wins over the config file.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("DATABASE_URL") {
            if !url.is_empty() {
                self.store.database_url = url;
            }
        }
    }

    /// Listener address in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
