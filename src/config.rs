use serde::Deserialize;
use std::path::PathBuf;

/// Default path segment under which rendered documentation is served
pub const DEFAULT_DOC_RESOURCE: &str = "doc";

/// Portal configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PortalConfig {
    /// Base URL of the backend service (e.g. "https://docs.example.com")
    pub base_url: String,
    /// Path segment under which rendered documentation is served
    pub doc_resource: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            doc_resource: DEFAULT_DOC_RESOURCE.to_string(),
        }
    }
}

/// Returns the path to the data directory for docport.
/// Uses $XDG_DATA_HOME/docport if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/docport,
/// or ./docport if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the preference database file.
pub fn db_path() -> PathBuf {
    data_dir().join("preferences.db")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("docport")
}
