use crate::models::settings::Settings;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads startup preferences from a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service pointed at the platform config directory
    pub fn from_project_dirs() -> Self {
        let path = if let Some(dirs) = ProjectDirs::from("com", "OnlineTimer", "OnlineTimer") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; looking for settings in current dir");
            PathBuf::from(SETTINGS_FILE)
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}; using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;
        let settings = Self::parse(&content)?;
        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Like `load`, but logs failures and falls back to defaults
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {}, using defaults", e);
                Settings::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Settings, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings.sanitized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ThemePreference;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        assert_eq!(service.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "theme = \"dark\"\nalert_volume = 0.25\nsounds_dir = \"/opt/sounds\"\n",
        )
        .unwrap();

        let settings = SettingsService::new(&path).load().unwrap();
        assert_eq!(
            settings,
            Settings {
                theme: ThemePreference::Dark,
                alert_volume: 0.25,
                sounds_dir: Some(PathBuf::from("/opt/sounds")),
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_parse_clamps_volume() {
        let settings = SettingsService::parse("alert_volume = 7.0").unwrap();
        assert_eq!(settings.alert_volume, 1.0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "theme = [").unwrap();

        let service = SettingsService::new(&path);
        assert!(matches!(service.load(), Err(SettingsError::Parse(_))));
        assert_eq!(service.load_or_default(), Settings::default());
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(SettingsService::parse("theme = \"sepia\"").is_err());
    }
}
