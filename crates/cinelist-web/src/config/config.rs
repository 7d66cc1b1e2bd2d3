//! `AppConfig` struct and TOML loading.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// TMDB connection settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the server listens on.
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

/// TMDB connection configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct TmdbConfig {
    /// API key. Empty means every catalog request is rejected by TMDB.
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the TMDB API v3.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL of the TMDB image host.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
        }
    }
}

const fn default_listen() -> SocketAddr {
    SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::LOCALHOST), 3000)
}

fn default_base_url() -> String {
    String::from("https://api.themoviedb.org/3")
}

fn default_image_base_url() -> String {
    String::from("https://image.tmdb.org/t/p")
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Replaces the configured API key with `key` when one is given
    /// (taken from `TMDB_API_KEY`).
    #[must_use]
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.is_empty()) {
            self.tmdb.api_key = key;
        }
        self
    }
}

impl TmdbConfig {
    /// Logs a warning when no API key is configured. Returns `true` if missing.
    pub fn warn_if_api_key_missing(&self) -> bool {
        let missing = self.api_key.is_empty();
        if missing {
            tracing::warn!("TMDB API key is not configured; catalog requests will fail");
        }
        missing
    }
}
