use std::path::PathBuf;

/// User settings read from the PAN `pan.xml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanSettings {
    pub fullname: Option<String>,
    pub department: Option<String>,
    pub userlogin: Option<String>,
    /// Directory holding the PAN month files (`<verzeichnis>/pan`)
    pub schedule_dir: Option<PathBuf>,
}
