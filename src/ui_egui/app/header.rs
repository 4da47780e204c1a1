//! Window chrome: title header and footer.

use super::TimerApp;
use egui::RichText;

const HEADER_HEIGHT: f32 = 64.0;
const FOOTER_HEIGHT: f32 = 32.0;

impl TimerApp {
    pub(super) fn render_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .exact_height(HEADER_HEIGHT)
            .frame(egui::Frame::none().fill(self.theme.chrome_background))
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("Online Timer")
                            .size(28.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                });
            });
    }

    /// Footer with the running count and shortcut hints
    pub(super) fn render_footer(&self, ctx: &egui::Context) {
        let running = self
            .board
            .units()
            .iter()
            .filter(|unit| unit.is_running())
            .count();
        let status = format!(
            "{} timer{}, {} running  ·  Ctrl+N: add timer  ·  Esc: silence alerts",
            self.board.len(),
            if self.board.len() == 1 { "" } else { "s" },
            running
        );

        egui::TopBottomPanel::bottom("footer")
            .exact_height(FOOTER_HEIGHT)
            .frame(egui::Frame::none().fill(self.theme.chrome_background))
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(status)
                            .size(12.0)
                            .color(self.theme.text_secondary),
                    );
                });
            });
    }
}
