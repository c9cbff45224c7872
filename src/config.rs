//! Configuration Management
//!
//! Connection settings from `~/.config/ecloud/config.json`, overridden by
//! `ECLOUD_API_KEY`, `ECLOUD_API_URL` and `ECLOUD_HTTP_TIMEOUT_MS`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::connection::HttpConnection;

pub const DEFAULT_BASE_URL: &str = "https://api.ukfast.io";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const ENV_API_KEY: &str = "ECLOUD_API_KEY";
const ENV_API_URL: &str = "ECLOUD_API_URL";
const ENV_TIMEOUT_MS: &str = "ECLOUD_HTTP_TIMEOUT_MS";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ecloud").join("config.json"))
    }

    /// Load from the default path, then apply environment overrides.
    /// A missing or unreadable file falls back to defaults.
    pub fn load() -> Self {
        let config = Self::config_path()
            .filter(|path| path.exists())
            .and_then(|path| match Self::load_from(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring config file {}: {:#}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default();

        config.with_overrides(|name| std::env::var(name).ok())
    }

    /// Load from an explicit file, without environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Apply overrides from `lookup` (normally the process environment)
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            match raw.parse() {
                Ok(ms) => self.timeout_ms = ms,
                Err(_) => tracing::warn!("Ignoring invalid {}: {}", ENV_TIMEOUT_MS, raw),
            }
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Build an HTTP connection from these settings
    pub fn connection(&self) -> Result<HttpConnection> {
        let api_key = self
            .api_key
            .as_deref()
            .with_context(|| format!("No API key configured (set {})", ENV_API_KEY))?;

        HttpConnection::with_timeout(&self.base_url, api_key, self.timeout())
            .with_context(|| format!("Failed to create connection to {}", self.base_url))
    }
}
