//! Loading configuration from disk (runtime-only)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;

/// Default config location: `<config dir>/tweetsmith/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tweetsmith").join("config.json"))
}

/// Load the configuration
///
/// An explicitly given path must exist. Otherwise the default location is
/// tried, and built-in defaults are used when nothing is there.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return read_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => read_config(&path),
        _ => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}
