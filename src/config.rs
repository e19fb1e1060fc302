/// Application configuration
///
/// Settings are read from `config.json` in the user's config directory:
/// - Linux: ~/.config/profile-card/config.json
/// - macOS: ~/Library/Application Support/profile-card/config.json
/// - Windows: %APPDATA%\profile-card\config.json
///
/// A missing file means "all defaults", and any field left out of the file
/// falls back to its default value.
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ConfigError;

/// Name of the application directory under data/config dirs
const APP_DIR: &str = "profile-card";

/// Overrides `data_dir` when set
pub const DATA_DIR_ENV: &str = "PROFILE_CARD_DATA_DIR";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the database and the imported picture
    pub data_dir: PathBuf,
    /// Database file name inside `data_dir`
    pub database_file: String,
    /// File name every imported picture is written to
    pub image_file: String,
    /// Name shown while no profile has been saved yet
    pub default_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);

        Self {
            data_dir,
            database_file: "profile_card.db".to_string(),
            image_file: "profile.jpg".to_string(),
            default_name: "No name set".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the config from the default location, then apply the environment override.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };

        Ok(config.apply_env(std::env::var_os(DATA_DIR_ENV)))
    }

    /// Apply the value of `PROFILE_CARD_DATA_DIR`, if it was set and non-empty.
    pub fn apply_env(mut self, data_dir: Option<OsString>) -> Self {
        if let Some(dir) = data_dir.filter(|dir| !dir.is_empty()) {
            debug!("{} overrides data_dir", DATA_DIR_ENV);
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    /// Load the config from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Where `load()` looks for the config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    pub fn image_path(&self) -> PathBuf {
        self.data_dir.join(&self.image_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_name, "No name set");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "data_dir": "/tmp/cards", "image_file": "me.png" }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/cards"));
        assert_eq!(config.image_path(), PathBuf::from("/tmp/cards/me.png"));
        assert_eq!(config.database_path(), PathBuf::from("/tmp/cards/profile_card.db"));
        assert_eq!(config.default_name, "No name set");
    }

    #[test]
    fn test_env_overrides_data_dir() {
        let config = AppConfig::default().apply_env(Some(OsString::from("/srv/cards")));

        assert_eq!(config.data_dir, PathBuf::from("/srv/cards"));
        assert_eq!(config.image_path(), PathBuf::from("/srv/cards/profile.jpg"));
        assert_eq!(config.database_path(), PathBuf::from("/srv/cards/profile_card.db"));
    }

    #[test]
    fn test_unset_or_empty_env_keeps_data_dir() {
        let base = AppConfig {
            data_dir: PathBuf::from("/tmp/cards"),
            ..AppConfig::default()
        };

        assert_eq!(base.clone().apply_env(None), base);
        assert_eq!(base.clone().apply_env(Some(OsString::new())), base);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
