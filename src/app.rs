use adw::Application;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::utils::normalize_url;

pub const DEFAULT_API_BASE_URL: &str = "https://contact-manager-backend-0lbk.onrender.com/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid base_url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub log_level: String,
    /// Request timeout; unset leaves the transport default.
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
            timeout_secs: None,
        }
    }
}

impl Settings {
    fn toml_path() -> Option<PathBuf> {
        let proj = ProjectDirs::from("com", "example", "ContactsGtk")?;
        Some(proj.config_dir().join("contacts.toml"))
    }

    /// Never fails: a missing or broken file falls back to defaults.
    pub fn load() -> Self {
        let from_file = match Self::toml_path() {
            Some(path) if path.exists() => match Self::load_from(&path) {
                Ok(settings) => {
                    log::debug!("settings loaded from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("ignoring {}: {e}", path.display());
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        let mut settings = from_file.with_env(|key| std::env::var(key).ok());
        if let Err(e) = settings.validate() {
            log::warn!("{e}; using {DEFAULT_API_BASE_URL}");
            settings.base_url = DEFAULT_API_BASE_URL.to_string();
        }
        settings
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let mut settings: Settings = toml::from_str(&text)?;
        settings.base_url = normalize_url(&settings.base_url);
        settings.validate()?;
        Ok(settings)
    }

    /// Applies `CONTACTS_API_URL` and `CONTACTS_LOG` from `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("CONTACTS_API_URL").filter(|v| !v.trim().is_empty()) {
            self.base_url = normalize_url(&url);
        }
        if let Some(level) = lookup("CONTACTS_LOG").filter(|v| !v.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })?;
        Ok(())
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs)
    }
}

pub fn build_ui(app: &Application, settings: &Settings) {
    log::info!("using contacts API at {}", settings.base_url);
    crate::ui::main_window::show_main_window(app, settings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let file = write_settings("base_url = \"localhost:3000/api/\"\n");
        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.base_url, "https://localhost:3000/api");
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.timeout(), None);
    }

    #[test]
    fn timeout_and_level_are_read() {
        let file = write_settings("log_level = \"debug\"\ntimeout_secs = 15\n");
        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.log_filter(), log::LevelFilter::Debug);
        assert_eq!(settings.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = write_settings("base_url = [1, 2");
        assert!(matches!(Settings::load_from(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let file = write_settings("base_url = \"  \"\n");
        assert!(matches!(
            Settings::load_from(file.path()),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn env_overrides_file_values() {
        let settings = Settings::default().with_env(|key| match key {
            "CONTACTS_API_URL" => Some("http://127.0.0.1:8080/api/".into()),
            "CONTACTS_LOG" => Some("warn".into()),
            _ => None,
        });
        assert_eq!(settings.base_url, "http://127.0.0.1:8080/api");
        assert_eq!(settings.log_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let settings = Settings {
            log_level: "chatty".into(),
            ..Settings::default()
        };
        assert_eq!(settings.log_filter(), log::LevelFilter::Info);
    }
}
