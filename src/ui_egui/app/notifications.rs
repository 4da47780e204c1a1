use super::TimerApp;
use crate::services::countdown::TimerExpired;

impl TimerApp {
    /// Surface an expiry outside the window: desktop notification and a
    /// taskbar attention request.
    pub(super) fn announce_expiry(&self, ctx: &egui::Context, expired: &TimerExpired) {
        ctx.send_viewport_cmd(egui::ViewportCommand::RequestUserAttention(
            egui::UserAttentionType::Informational,
        ));

        if let Err(e) = self.notification_service.show_timer_expired(&expired.label) {
            log::error!(
                "Failed to show expiry notification for timer {}: {}",
                expired.id,
                e
            );
        }
    }
}
