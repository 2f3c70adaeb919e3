//! Readers for the files written by the PAN desktop application.
//!
//! - month files (`Tag` elements with up to four time ranges)
//! - the `pan.xml` settings file (Java properties XML)
//!
//! Both are plain serde mappings from PAN field names onto `models`.

pub mod month_file;
pub mod settings_file;

pub use month_file::{parse_month_xml, read_month_file};
pub use settings_file::{default_settings_path, parse_settings_xml, read_settings};

use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// Read a PAN file as text. Older PAN versions write ISO-8859-1, so bytes
/// that are not valid UTF-8 are decoded as Latin-1.
pub(crate) fn read_text(path: &Path) -> AppResult<String> {
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!(path = %path.display(), "file is not UTF-8, decoding as ISO-8859-1");
            e.into_bytes().iter().map(|&b| b as char).collect()
        }
    })
}
