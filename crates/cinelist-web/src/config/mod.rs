//! Application configuration module.
//!
//! Manages the TOML config file holding the listen address and the
//! TMDB connection settings.

#[allow(clippy::module_inception)]
mod config;
mod paths;

pub use config::AppConfig;
pub use paths::resolve_config_path;
