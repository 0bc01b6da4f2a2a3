//! Application configuration.

use crate::consts::cli_consts::{polling, view};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Persisted dashboard settings. Every field is optional in the file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the sensor API; overrides the environment when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Seconds between automatic fetches.
    pub refresh_interval_secs: u64,
    /// Rows per table page.
    pub items_per_page: usize,
    /// Directory CSV exports are written to. Defaults to the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    /// Fixed display offset from UTC, in minutes.
    pub utc_offset_minutes: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            refresh_interval_secs: polling::DEFAULT_REFRESH_INTERVAL_SECS,
            items_per_page: view::DEFAULT_ITEMS_PER_PAGE,
            export_dir: None,
            utc_offset_minutes: view::DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Directory CSV exports land in.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn validate(&self) -> Result<(), io::Error> {
        if !view::PAGE_SIZES.contains(&self.items_per_page) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "items_per_page must be one of {:?}, got {}",
                    view::PAGE_SIZES,
                    self.items_per_page
                ),
            ));
        }
        if self.refresh_interval_secs == 0
            || self.refresh_interval_secs > polling::MAX_REFRESH_INTERVAL_SECS
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "refresh_interval_secs must be between 1 and {}, got {}",
                    polling::MAX_REFRESH_INTERVAL_SECS,
                    self.refresh_interval_secs
                ),
            ));
        }
        // chrono rejects offsets of a day or more
        if self.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "utc_offset_minutes out of range: {}",
                    self.utc_offset_minutes
                ),
            ));
        }
        Ok(())
    }
}

/// Location of the configuration file, `~/.health-monitor/config.json`.
pub fn get_config_path() -> Result<PathBuf, io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Failed to get home directory")
    })?;
    Ok(home_path.join(".health-monitor").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        Config {
            api_url: Some("http://localhost:3000".to_string()),
            refresh_interval_secs: 30,
            items_per_page: 10,
            export_dir: None,
            utc_offset_minutes: 0,
        }
    }

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample_config();
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        Config::default().save(&path).unwrap();
        let config2 = sample_config();
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // Missing fields fall back to their defaults.
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "refresh_interval_secs": 30 }"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.items_per_page, 5);
        assert_eq!(config.utc_offset_minutes, 330);
        assert_eq!(config.api_url, None);
    }

    #[test]
    // Page sizes outside the offered set are rejected.
    fn test_load_rejects_unsupported_page_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "items_per_page": 7 }"#).unwrap();

        assert!(Config::load_from_file(&path).is_err());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_clear_removes_file_and_tolerates_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        assert!(Config::clear(&path).is_ok());
    }
}
