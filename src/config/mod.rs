//! Application configuration.
//!
//! Stored as YAML in the data directory (`~/.ttrack` on Unix-like systems,
//! `%APPDATA%\ttrack` on Windows). A missing file is not an error: every
//! command falls back to the defaults for the active data directory.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn default_max_recent() -> usize {
    15
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Where the CSV time log lives. May start with `~`.
    pub log_file: String,
    /// Where generated reports are written. May start with `~`.
    pub report_file: String,
    /// How many project codes `recent` lists at most.
    #[serde(default = "default_max_recent")]
    pub max_recent_projects: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults_for(&Self::config_dir())
    }
}

impl Config {
    /// Standard data directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ttrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ttrack")
        }
    }

    pub fn config_file(base: &Path) -> PathBuf {
        base.join("ttrack.conf")
    }

    pub fn session_file(base: &Path) -> PathBuf {
        base.join("session.yaml")
    }

    /// Default configuration for a given data directory.
    pub fn defaults_for(base: &Path) -> Self {
        Self {
            log_file: base.join("time_log.csv").to_string_lossy().to_string(),
            report_file: base.join("time_report.txt").to_string_lossy().to_string(),
            max_recent_projects: default_max_recent(),
        }
    }

    /// Load the configuration from `<base>/ttrack.conf`, falling back to
    /// defaults when the file does not exist.
    pub fn load_from(base: &Path) -> AppResult<Self> {
        let path = Self::config_file(base);
        if !path.exists() {
            return Ok(Self::defaults_for(base));
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Create the data directory and write a fresh configuration file.
    ///
    /// In test mode the directory is still created but the configuration
    /// file is not written, keeping test runs from leaving config behind.
    pub fn init_all(base: &Path, is_test: bool) -> AppResult<Self> {
        fs::create_dir_all(base)?;
        let config = Self::defaults_for(base);

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))?;
            let mut file = fs::File::create(Self::config_file(base))?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
