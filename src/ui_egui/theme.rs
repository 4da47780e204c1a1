//! Theme module for the egui timer application
//!
//! Defines the TimerTheme colors and how the configured preference maps to
//! light or dark visuals.

use crate::models::settings::ThemePreference;
use egui::Color32;

/// Colors used by the timer window
#[derive(Debug, Clone, PartialEq)]
pub struct TimerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background
    pub app_background: Color32,

    /// Header and footer strip background
    pub chrome_background: Color32,

    /// Timer card background
    pub card_background: Color32,

    /// Start button and focus accents
    pub accent: Color32,

    /// Pause button fill
    pub pause: Color32,

    /// Start button fill when the timer is at 00:00:00
    pub disabled: Color32,

    /// Delete button hover color
    pub danger: Color32,

    /// Primary text color (digits, label)
    pub text_primary: Color32,

    /// Secondary text color (icons, footer)
    pub text_secondary: Color32,
}

impl TimerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(240, 253, 250),
            chrome_background: Color32::from_rgb(255, 255, 255),
            card_background: Color32::from_rgb(255, 255, 255),
            accent: Color32::from_rgb(20, 184, 166),
            pause: Color32::from_rgb(245, 158, 11),
            disabled: Color32::from_rgb(209, 213, 219),
            danger: Color32::from_rgb(239, 68, 68),
            text_primary: Color32::from_rgb(55, 65, 81),
            text_secondary: Color32::from_rgb(107, 114, 128),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(17, 24, 39),
            chrome_background: Color32::from_rgb(31, 41, 55),
            card_background: Color32::from_rgb(31, 41, 55),
            accent: Color32::from_rgb(45, 212, 191),
            pause: Color32::from_rgb(251, 191, 36),
            disabled: Color32::from_rgb(75, 85, 99),
            danger: Color32::from_rgb(248, 113, 113),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(156, 163, 175),
        }
    }

    /// Resolve a preference, asking the OS when set to follow the system
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke.color = self.accent;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = TimerTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.accent, Color32::from_rgb(20, 184, 166));
    }

    #[test]
    fn test_dark_theme() {
        let theme = TimerTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(17, 24, 39));
    }

    #[test]
    fn test_explicit_preferences() {
        assert_eq!(TimerTheme::for_preference(ThemePreference::Light), TimerTheme::light());
        assert_eq!(TimerTheme::for_preference(ThemePreference::Dark), TimerTheme::dark());
    }
}
