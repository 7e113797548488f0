//! Configuration loading from file system

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::HistoryConfig;
use crate::error::ResultExt;

/// Get the config file path (~/.edgeboard/clipboard.json)
pub fn config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Load configuration from ~/.edgeboard/clipboard.json
///
/// Returns `HistoryConfig::default()` if the file is missing or invalid.
#[instrument(name = "load_config")]
pub fn load_config() -> HistoryConfig {
    load_config_from(&config_path())
}

/// Load configuration from an explicit path.
///
/// A missing file is normal (first run) and logged at info level; an
/// unreadable or malformed file is logged as a warning. Both fall back to
/// defaults.
pub fn load_config_from(path: &Path) -> HistoryConfig {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return HistoryConfig::default();
    }

    match read_config(path).ok_or_warn("read clipboard config") {
        Some(config) => {
            let config = config.normalized();
            info!(
                path = %path.display(),
                max_history = config.max_history,
                max_content_size = config.max_content_size,
                flag_sensitive = config.flag_sensitive,
                when_full = ?config.when_full,
                "Loaded clipboard history config"
            );
            config
        }
        None => HistoryConfig::default(),
    }
}

fn read_config(path: &Path) -> Result<HistoryConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {:?}", path))?;
    serde_json::from_str::<HistoryConfig>(raw.trim())
        .with_context(|| format!("Failed to parse config at {:?}", path))
}
