mod countdown;
mod header;
mod lifecycle;
mod notifications;
mod shortcuts;

use crate::services::countdown::TimerBoard;
use crate::services::notification::NotificationService;
use crate::ui_egui::theme::TimerTheme;

pub struct TimerApp {
    /// Every countdown timer, in creation order
    board: TimerBoard,
    /// Currently applied theme colors
    theme: TimerTheme,
    notification_service: NotificationService,
}

impl eframe::App for TimerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
