//! Configuration module
//!
//! Handles loading and saving of the optional config.toml file and resolving
//! the data directory the stores live in.

mod types;

#[allow(unused_imports)]
pub use types::{Config, Files, LifeDisplay};

use crate::error::{DaysError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
const DATA_DIR_NAME: &str = ".days";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        DaysError::Config(format!(
            "Cannot read config from '{}': {}. Run 'days config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration, falling back to defaults when the file does not exist
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load(path)
    } else {
        Ok(Config::default())
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| DaysError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Resolve the data directory (explicit path or `~/.days`) and make sure it exists
pub fn data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match explicit {
        Some(dir) => dir,
        None => dirs::home_dir()
            .map(|home| home.join(DATA_DIR_NAME))
            .ok_or_else(|| {
                DaysError::Config("Cannot determine the home directory".to_string())
            })?,
    };

    fs::create_dir_all(&dir).map_err(|e| {
        DaysError::Storage(format!("Cannot create '{}': {}", dir.display(), e))
    })?;

    Ok(dir)
}
