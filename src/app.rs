use adw::Application;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const API_URL_ENV: &str = "CONTACTS_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config encode: {0}")]
    Encode(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    fn config_path() -> Option<PathBuf> {
        let proj = ProjectDirs::from("com", "example", "Contacts")?;
        Some(proj.config_dir().join("config.toml"))
    }

    /// `Ok(None)` when the file does not exist yet.
    pub fn read_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(toml::from_str(&text)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn with_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        self.base_url = crate::utils::normalize_url(&self.base_url);
        self
    }

    // A missing file is created with defaults so there is something to edit.
    pub fn load() -> Self {
        let config = match Self::config_path() {
            Some(path) => match Self::read_from(&path) {
                Ok(Some(config)) => config,
                Ok(None) => {
                    let config = Self::default();
                    if let Err(e) = config.save_to(&path) {
                        log::warn!("could not write {}: {e}", path.display());
                    }
                    config
                }
                Err(e) => {
                    log::warn!("ignoring {}: {e}", path.display());
                    Self::default()
                }
            },
            None => Self::default(),
        };
        config.with_override(std::env::var(API_URL_ENV).ok())
    }
}

pub fn build_ui(app: &Application) {
    let config = AppConfig::load();
    log::info!("using contacts backend at {}", config.base_url);
    crate::ui::main_window::show_main_window(app, &config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let read = AppConfig::read_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(read, None);
    }

    #[test]
    fn save_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig { base_url: "http://contacts.lan:8080".into() };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::read_from(&path).unwrap(), Some(config));
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(AppConfig::read_from(&path).unwrap(), Some(AppConfig::default()));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = [").unwrap();
        assert!(matches!(AppConfig::read_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn override_wins_and_is_normalized() {
        let config = AppConfig::default().with_override(Some("backend:4000/".into()));
        assert_eq!(config.base_url, "http://backend:4000");
        let config = AppConfig::default().with_override(Some("  ".into()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
