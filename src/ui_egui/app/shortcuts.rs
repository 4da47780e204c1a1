use super::TimerApp;

impl TimerApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let (add_timer, silence) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if add_timer {
            self.board.add();
        }

        if silence {
            let silenced = self.board.silence_alerts();
            if silenced > 0 {
                log::info!("Silenced {} alert(s)", silenced);
            }
        }
    }
}
