mod card_rendering;

use super::TimerApp;
use crate::models::timer::TimerId;
use card_rendering::{render_unit_card, CardUiAction};
use egui::RichText;
use std::time::Instant;

const CARD_SPACING: f32 = 24.0;
const ADD_BUTTON_HEIGHT: f32 = 64.0;
const MAX_CONTENT_WIDTH: f32 = 820.0;

impl TimerApp {
    /// Render every timer card plus the add button, then apply the
    /// collected card actions.
    pub(super) fn render_timers(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let mut pending: Vec<(TimerId, CardUiAction)> = Vec::new();
        let mut add_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let width = ui.available_width().min(MAX_CONTENT_WIDTH);
                    let margin = ((ui.available_width() - width) / 2.0).max(0.0);

                    ui.horizontal(|ui| {
                        ui.add_space(margin);
                        ui.vertical(|ui| {
                            ui.set_width(width);
                            ui.add_space(CARD_SPACING);

                            for unit in self.board.units_mut() {
                                let id = unit.id();
                                for action in render_unit_card(ui, unit, &theme) {
                                    pending.push((id, action));
                                }
                                ui.add_space(CARD_SPACING);
                            }

                            let add_button = egui::Button::new(
                                RichText::new("➕  Add another timer")
                                    .size(18.0)
                                    .color(theme.accent),
                            )
                            .fill(theme.app_background)
                            .stroke(egui::Stroke::new(2.0, theme.accent))
                            .rounding(12.0)
                            .min_size(egui::vec2(width, ADD_BUTTON_HEIGHT));
                            if ui.add(add_button).clicked() {
                                add_requested = true;
                            }
                            ui.add_space(CARD_SPACING);
                        });
                    });
                });
        });

        let now = Instant::now();
        for (id, action) in pending {
            self.apply_card_action(id, action, now);
        }
        if add_requested {
            self.board.add();
        }
    }

    fn apply_card_action(&mut self, id: TimerId, action: CardUiAction, now: Instant) {
        match action {
            CardUiAction::Start => {
                self.board.start(id, now);
            }
            CardUiAction::Delete => {
                self.board.delete(id);
            }
            CardUiAction::Pause => {
                if let Some(unit) = self.board.unit_mut(id) {
                    unit.pause();
                }
            }
            CardUiAction::Reset => {
                if let Some(unit) = self.board.unit_mut(id) {
                    unit.reset();
                }
            }
            CardUiAction::TogglePreview => {
                if let Some(unit) = self.board.unit_mut(id) {
                    unit.toggle_preview();
                }
            }
            CardUiAction::SelectSound(sound_id) => {
                if let Some(unit) = self.board.unit_mut(id) {
                    unit.select_sound(sound_id);
                }
            }
        }
    }
}
