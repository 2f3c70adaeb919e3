use crate::errors::{AppError, AppResult};
use crate::models::PanSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// `<properties><entry key="...">value</entry>...</properties>`
#[derive(Debug, Deserialize)]
struct RawProperties {
    #[serde(rename = "entry", default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "@key")]
    key: String,
    #[serde(rename = "$text", default)]
    value: Option<String>,
}

/// `~/pan.xml`, where PAN keeps its settings after the first run.
pub fn default_settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pan.xml")
}

pub fn read_settings(path: &Path) -> AppResult<PanSettings> {
    if !path.exists() {
        return Err(AppError::SettingsNotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "reading PAN settings");
    let xml = super::read_text(path)?;
    parse_settings_xml(&xml)
}

pub fn parse_settings_xml(xml: &str) -> AppResult<PanSettings> {
    let raw: RawProperties = quick_xml::de::from_str(xml)?;

    let mut settings = PanSettings::default();
    for entry in raw.entries {
        let Some(value) = entry
            .value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        else {
            continue;
        };

        match entry.key.as_str() {
            "verzeichnis" => settings.schedule_dir = Some(PathBuf::from(value).join("pan")),
            "username" => settings.fullname = Some(value),
            "abteilung" => settings.department = Some(value),
            "uid" => settings.userlogin = Some(value),
            _ => {}
        }
    }

    Ok(settings)
}
