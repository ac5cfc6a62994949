//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::constants::CONFIG_FILE;
use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Load a TOML file, returning the default when it does not exist
pub fn load_toml<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let value: T = toml::from_str(&content)?;
    Ok(value)
}

/// Save a TOML file
pub fn save_toml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = toml::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

/// Load the app config from the config directory
///
/// A missing or unreadable file falls back to defaults; a missing one is
/// created with the defaults.
pub fn load_app_config() -> AppConfig {
    let path = match get_or_create_config_dir() {
        Ok(dir) => dir.join(CONFIG_FILE),
        Err(e) => {
            warn!(error = %e, "No config directory, using defaults");
            return AppConfig::default();
        }
    };

    // Write the defaults on first run so there is a file to edit
    if !path.exists() {
        if let Err(e) = save_toml(&path, &AppConfig::default()) {
            warn!(path = %path.display(), error = %e, "Failed to write default config");
        }
        return AppConfig::default();
    }

    match load_toml::<AppConfig>(&path) {
        Ok(config) => {
            info!(path = %path.display(), "Configuration loaded");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
            AppConfig::default()
        }
    }
}
