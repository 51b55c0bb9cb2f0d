//! Configuration types for the terminal client.

use hyperserp_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration, loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend connection settings.
    pub search: SearchSettings,
    /// Terminal UI settings.
    pub ui: UiSettings,
}

/// Backend connection settings (`[search]` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Base URL of the search backend.
    pub base_url: String,
    /// Number of results to request per search.
    pub top_k: usize,
    /// Custom User-Agent string (None = reqwest default).
    pub user_agent: Option<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        let defaults = ClientConfig::default();
        Self {
            base_url: defaults.base_url,
            top_k: defaults.top_k,
            user_agent: None,
        }
    }
}

/// Terminal UI settings (`[ui]` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Number of placeholder rows shown while a search is loading.
    pub skeleton_rows: usize,
    /// Event-loop poll interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            skeleton_rows: 6,
            tick_ms: 100,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists, then apply environment
    /// overrides (`HYPERSERP_BASE_URL`).
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load() -> crate::error::Result<Self> {
        let path = crate::paths::config_file();
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        if let Ok(base_url) = std::env::var("HYPERSERP_BASE_URL") {
            config.search.base_url = base_url;
        }
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults for
    /// missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::AppError::Config(e.to_string()))
    }

    /// Client configuration derived from the `[search]` table.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.search.base_url.clone(),
            top_k: self.search.top_k,
            user_agent: self.search.user_agent.clone(),
        }
    }
}
