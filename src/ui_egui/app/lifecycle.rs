use super::TimerApp;
use crate::models::settings::Settings;
use crate::services::audio::{open_backend, AudioBackend};
use crate::services::countdown::{TickClock, TimerBoard};
use crate::services::notification::NotificationService;
use crate::ui_egui::theme::TimerTheme;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// How often to check whether an alert sound has finished on its own
const AUDIO_POLL_INTERVAL: Duration = Duration::from_millis(250);

impl TimerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let audio = open_backend(settings.sounds_dir(), settings.alert_volume);
        let app = Self::with_audio(settings, audio);
        app.theme.apply_to_context(&cc.egui_ctx);
        app
    }

    fn with_audio(settings: Settings, audio: Rc<dyn AudioBackend>) -> Self {
        let theme = TimerTheme::for_preference(settings.theme);
        log::info!(
            "Using {} theme",
            if theme.is_dark { "dark" } else { "light" }
        );

        let board = TimerBoard::new(
            TickClock::default(),
            audio,
            settings.default_label,
        );
        let notification_service = NotificationService::new(settings.notify_on_expiry);

        Self {
            board,
            theme,
            notification_service,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        // Deliver ticks before rendering so the digits are current
        let now = Instant::now();
        for expired in self.board.advance(now) {
            self.announce_expiry(ctx, &expired);
        }
        self.board.sync_audio();

        self.render_header(ctx);
        self.render_footer(ctx);
        self.render_timers(ctx);

        self.schedule_repaint(ctx);
    }

    /// Wake up for the next due tick, and keep polling while a sound plays
    fn schedule_repaint(&self, ctx: &egui::Context) {
        let now = Instant::now();
        if let Some(wait) = self.board.next_wakeup(now) {
            ctx.request_repaint_after(wait);
        }
        if self.board.any_alert_playing() {
            ctx.request_repaint_after(AUDIO_POLL_INTERVAL);
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.board.clear();
        log::info!("Online Timer closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ThemePreference;
    use crate::services::audio::NullAudio;

    #[test]
    fn test_app_starts_with_one_configured_timer() {
        let settings = Settings {
            theme: ThemePreference::Dark,
            default_label: "Tea".to_string(),
            notify_on_expiry: false,
            ..Settings::default()
        };
        let app = TimerApp::with_audio(settings, Rc::new(NullAudio::new()));

        assert!(app.theme.is_dark);
        assert_eq!(app.board.len(), 1);
        assert_eq!(app.board.units()[0].label(), "Tea");
        assert!(!app.notification_service.is_enabled());
    }

    #[test]
    fn test_exit_releases_timers() {
        let settings = Settings {
            theme: ThemePreference::Light,
            ..Settings::default()
        };
        let mut app = TimerApp::with_audio(settings, Rc::new(NullAudio::new()));
        app.board.add();
        app.handle_exit(None);
        assert!(app.board.is_empty());
        assert_eq!(app.board.active_registrations(), 0);
    }
}
