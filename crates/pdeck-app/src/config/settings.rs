//! Settings parser for the Profile Deck config file

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use pdeck_core::{Error, Result};

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "profile-deck";

/// Environment override for the API base URL. Mirrors the web client's
/// build-time base-URL substitution as a deployment-time variable.
pub const API_URL_ENV: &str = "PDECK_API_URL";

/// Path of the user-level settings file.
pub fn config_file_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the user config file, then apply the environment
/// override. A missing file yields defaults; a malformed file is an error
/// rather than silently ignored configuration.
pub fn load_settings() -> Result<Settings> {
    let mut settings = load_settings_from(&config_file_path())?;
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.is_empty() {
            settings.api.base_url = url;
        }
    }
    Ok(settings)
}

/// Load settings from a specific file path. Missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!("no config file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let raw = std::fs::read_to_string(path)?;
    let settings = toml::from_str(&raw)
        .map_err(|e| Error::config_invalid(format!("{}: {e}", path.display())))?;
    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Write settings to a specific file path, creating parent directories.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("failed to serialize settings: {e}")))?;
    std::fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.api.base_url = "https://api.example.com/v2/".into();
        settings.session.user_id = "u-42".into();
        settings.session.officer = true;

        save_settings_to(&path, &settings).unwrap();
        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api = \"not a table\"").unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(err.is_fatal());
    }
}
