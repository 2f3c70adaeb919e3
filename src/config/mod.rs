use crate::errors::{AppError, AppResult};
use crate::pan::default_settings_path;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the PAN settings file (`pan.xml`)
    #[serde(default = "default_pan_config")]
    pub pan_config: String,
    #[serde(default = "default_color")]
    pub color: bool,
    /// tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_pan_config() -> String {
    default_settings_path().to_string_lossy().to_string()
}
fn default_color() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pan_config: default_pan_config(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pancheck")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pancheck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pancheck.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    /// PAN settings path with `~` expanded
    pub fn pan_config_path(&self) -> PathBuf {
        expand_tilde(&self.pan_config)
    }

    /// Create the config directory and write the default configuration.
    /// An existing file is left untouched.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if is_test || path.exists() {
            return Ok(path);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        fs::write(&path, yaml)?;
        Ok(path)
    }
}
