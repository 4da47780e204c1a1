// Settings module
// Startup preferences read from settings.toml. Timer state is never stored.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which visuals the window uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the operating system
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub theme: ThemePreference,
    /// Directory holding the preset alert files; `assets/sounds` when unset
    pub sounds_dir: Option<PathBuf>,
    /// Playback volume in [0, 1]
    pub alert_volume: f32,
    /// Show a desktop notification when a timer expires
    pub notify_on_expiry: bool,
    /// Label given to newly added timers
    pub default_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 720.0,
            window_height: 860.0,
            theme: ThemePreference::System,
            sounds_dir: None,
            alert_volume: 1.0,
            notify_on_expiry: true,
            default_label: "Timer 1".to_string(),
        }
    }
}

impl Settings {
    /// Bring user-supplied values back into range
    pub fn sanitized(mut self) -> Self {
        self.alert_volume = if self.alert_volume.is_finite() {
            self.alert_volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        if !self.window_width.is_finite() || self.window_width < 320.0 {
            self.window_width = 320.0;
        }
        if !self.window_height.is_finite() || self.window_height < 240.0 {
            self.window_height = 240.0;
        }
        self
    }

    pub fn sounds_dir(&self) -> PathBuf {
        self.sounds_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("assets").join("sounds"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_label, "Timer 1");
        assert_eq!(settings.theme, ThemePreference::System);
        assert!(settings.notify_on_expiry);
        assert_eq!(settings.sounds_dir(), PathBuf::from("assets/sounds"));
    }

    #[test]
    fn test_sanitized_clamps_volume_and_window() {
        let settings = Settings {
            alert_volume: 3.5,
            window_width: 10.0,
            window_height: f32::NAN,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(settings.alert_volume, 1.0);
        assert_eq!(settings.window_width, 320.0);
        assert_eq!(settings.window_height, 240.0);

        let quiet = Settings {
            alert_volume: -1.0,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(quiet.alert_volume, 0.0);
    }
}
