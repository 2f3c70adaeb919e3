//! Detect and fill fields missing from an older configuration file.
//! Existing values are never overwritten.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

/// Keys present in the default configuration but absent from the file.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add missing fields with their default values.
/// Returns `Ok(true)` when the file was rewritten.
pub fn migrate(path: &Path) -> AppResult<bool> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut changed = false;
    for (key, value) in defaults {
        if !current.contains_key(&key) {
            info(format!(
                "Adding missing field '{}'",
                key.as_str().unwrap_or_default()
            ));
            current.insert(key, value);
            changed = true;
        }
    }

    if changed {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml)?;
        success(format!("Configuration updated: {}", path.display()));
    }

    Ok(changed)
}
