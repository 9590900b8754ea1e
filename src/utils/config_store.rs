//! ConfigStore - Local Configuration Storage
//!
//! Reads and writes `AppConfig` as TOML in the config directory.

use std::fs;
use std::path::{Path, PathBuf};

use locale_config::Locale as SystemLocale;
use tracing::{error, info};

use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::utils::fs::get_or_create_config_dir;

const CONFIG_FILE: &str = "exam-admin.toml";

/// Path of the config file, created empty on first use
pub fn config_path() -> Result<PathBuf> {
    let path = get_or_create_config_dir()?.join(CONFIG_FILE);
    if !path.exists() {
        fs::write(&path, "")?;
    }
    Ok(path)
}

/// Load the config file, filling in the system locale when none is set
pub fn load_config() -> Result<AppConfig> {
    let path = config_path()?;
    let mut config = load_from(&path)?;

    if config.locale.is_none() {
        config.locale = system_language();
    }

    Ok(config)
}

/// Load a config file; an empty file yields the defaults
pub fn load_from(path: &Path) -> Result<AppConfig> {
    info!(path = ?path, "Loading config file");
    let value = fs::read_to_string(path)?;

    if value.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    let config: AppConfig = toml::from_str(&value).map_err(|e| {
        error!(error = %e, path = ?path, "Failed to parse config file");
        e
    })?;

    Ok(config.normalized())
}

/// Save the config file
pub fn save_config(config: &AppConfig) -> Result<()> {
    let path = config_path()?;
    save_to(&path, config)
}

pub fn save_to(path: &Path, config: &AppConfig) -> Result<()> {
    let value = toml::to_string(config)?;
    fs::write(path, value)?;
    info!(path = ?path, "Config saved");
    Ok(())
}

/// Language part of the OS locale ("en-US" -> "en")
fn system_language() -> Option<String> {
    let tag = SystemLocale::current().to_string();
    let lang = tag.split(['-', '_']).next().unwrap_or_default();
    (!lang.is_empty()).then(|| lang.to_string())
}
