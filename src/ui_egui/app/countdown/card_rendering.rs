//! Rendering logic for a single countdown timer card.

use crate::models::sound::AlertSound;
use crate::models::timer::TimeField;
use crate::services::countdown::CountdownUnit;
use crate::ui_egui::theme::TimerTheme;
use egui::{Color32, RichText};

// Card rendering constants
const CARD_ROUNDING: f32 = 12.0;
const CARD_PADDING: f32 = 24.0;
const LABEL_FONT_SIZE: f32 = 22.0;
const LABEL_EDIT_WIDTH: f32 = 240.0;
const DIGIT_FONT_SIZE: f32 = 72.0;
const DIGIT_FIELD_WIDTH: f32 = 100.0;
const SEPARATOR_WIDTH: f32 = 28.0;
const BUTTON_SIZE: egui::Vec2 = egui::vec2(150.0, 46.0);
const BUTTON_GAP: f32 = 16.0;

/// Button presses on a card, applied by the container after rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardUiAction {
    Start,
    Pause,
    Reset,
    TogglePreview,
    SelectSound(&'static str),
    Delete,
}

/// Render one timer card. Text edits are applied to the unit directly;
/// button presses are returned.
pub fn render_unit_card(
    ui: &mut egui::Ui,
    unit: &mut CountdownUnit,
    theme: &TimerTheme,
) -> Vec<CardUiAction> {
    let mut actions = Vec::new();

    egui::Frame::none()
        .fill(theme.card_background)
        .rounding(CARD_ROUNDING)
        .stroke(egui::Stroke::new(1.0, theme.disabled))
        .inner_margin(egui::Margin::same(CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                render_label(ui, unit, theme);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    render_header_controls(ui, unit, theme, &mut actions);
                });
            });

            ui.add_space(CARD_PADDING);
            render_time_fields(ui, unit, theme);
            ui.add_space(CARD_PADDING);
            render_buttons(ui, unit, theme, &mut actions);
        });

    actions
}

fn render_label(ui: &mut egui::Ui, unit: &mut CountdownUnit, theme: &TimerTheme) {
    let label_id = egui::Id::new(("timer_label", unit.id().0));

    if unit.is_label_editing() {
        let response = ui.add(
            egui::TextEdit::singleline(unit.label_mut())
                .id(label_id)
                .font(egui::FontId::proportional(LABEL_FONT_SIZE))
                .desired_width(LABEL_EDIT_WIDTH),
        );
        if response.lost_focus() {
            unit.finish_label_edit();
        }
        return;
    }

    ui.label(
        RichText::new(unit.label())
            .size(LABEL_FONT_SIZE)
            .color(theme.text_primary),
    );
    let pencil = ui
        .add(egui::Button::new(RichText::new("✏").color(theme.text_secondary)).frame(false))
        .on_hover_text("Rename timer");
    if pencil.clicked() {
        unit.begin_label_edit();
        ui.memory_mut(|memory| memory.request_focus(label_id));
    }
}

/// Sound selector, preview toggle and delete, laid out right to left
fn render_header_controls(
    ui: &mut egui::Ui,
    unit: &CountdownUnit,
    theme: &TimerTheme,
    actions: &mut Vec<CardUiAction>,
) {
    let delete = ui
        .add(egui::Button::new(RichText::new("✖").color(theme.text_secondary)).frame(false))
        .on_hover_text("Delete timer");
    if delete.hovered() {
        ui.painter().rect_stroke(
            delete.rect.expand(2.0),
            4.0,
            egui::Stroke::new(1.0, theme.danger),
        );
    }
    if delete.clicked() {
        actions.push(CardUiAction::Delete);
    }

    let (icon, hint) = if unit.alert_playing() {
        ("🔇", "Stop sound")
    } else {
        ("🔊", "Test sound")
    };
    let preview = ui
        .add(egui::Button::new(RichText::new(icon).color(theme.text_secondary)).frame(false))
        .on_hover_text(hint);
    if preview.clicked() {
        actions.push(CardUiAction::TogglePreview);
    }

    let mut selected = unit.sound().id;
    egui::ComboBox::from_id_source(("timer_sound", unit.id().0))
        .selected_text(unit.sound().display_name)
        .show_ui(ui, |ui| {
            for sound in AlertSound::all() {
                ui.selectable_value(&mut selected, sound.id, sound.display_name);
            }
        });
    if selected != unit.sound().id {
        actions.push(CardUiAction::SelectSound(selected));
    }
}

fn render_time_fields(ui: &mut egui::Ui, unit: &mut CountdownUnit, theme: &TimerTheme) {
    let spacing = ui.spacing().item_spacing.x;
    let row_width = 3.0 * DIGIT_FIELD_WIDTH + 2.0 * SEPARATOR_WIDTH + 4.0 * spacing;

    centered_row(ui, row_width, |ui| {
        for (index, field) in TimeField::ALL.into_iter().enumerate() {
            if index > 0 {
                ui.add_sized(
                    [SEPARATOR_WIDTH, DIGIT_FONT_SIZE],
                    egui::Label::new(
                        RichText::new(":")
                            .size(DIGIT_FONT_SIZE)
                            .color(theme.text_secondary),
                    ),
                );
            }
            render_time_field(ui, unit, field);
        }
    });
}

/// One two-digit field. Focus starts an edit, keystrokes go to the raw
/// buffer and losing focus commits.
fn render_time_field(ui: &mut egui::Ui, unit: &mut CountdownUnit, field: TimeField) {
    let mut text = unit.field_text(field);
    let editable = !unit.is_running();

    let response = ui.add_enabled(
        editable,
        egui::TextEdit::singleline(&mut text)
            .id(egui::Id::new(("timer_field", unit.id().0, field.label())))
            .font(egui::FontId::monospace(DIGIT_FONT_SIZE))
            .desired_width(DIGIT_FIELD_WIDTH)
            .horizontal_align(egui::Align::Center)
            .char_limit(2)
            .hint_text("00")
            .frame(false),
    );

    let editing_this = unit.field_state().editing_field() == Some(field);
    if response.gained_focus() || (response.changed() && !editing_this) {
        unit.begin_edit(field);
    }
    if response.changed() {
        unit.update_edit(&text);
    }
    if response.lost_focus() {
        unit.commit_edit();
    }
}

fn render_buttons(
    ui: &mut egui::Ui,
    unit: &CountdownUnit,
    theme: &TimerTheme,
    actions: &mut Vec<CardUiAction>,
) {
    let running = unit.is_running();
    let can_start = unit.can_start();
    let (text, fill) = if running {
        ("Pause", theme.pause)
    } else if can_start {
        ("Start", theme.accent)
    } else {
        ("Start", theme.disabled)
    };

    let row_width = 2.0 * BUTTON_SIZE.x + BUTTON_GAP;
    centered_row(ui, row_width, |ui| {
        let toggle = egui::Button::new(RichText::new(text).size(18.0).color(Color32::WHITE))
            .fill(fill)
            .rounding(BUTTON_SIZE.y / 2.0)
            .min_size(BUTTON_SIZE);
        if ui.add_enabled(running || can_start, toggle).clicked() {
            actions.push(if running {
                CardUiAction::Pause
            } else {
                CardUiAction::Start
            });
        }

        ui.add_space(BUTTON_GAP);

        let reset = egui::Button::new(
            RichText::new("Reset")
                .size(18.0)
                .color(theme.text_secondary),
        )
        .fill(theme.card_background)
        .stroke(egui::Stroke::new(2.0, theme.disabled))
        .rounding(BUTTON_SIZE.y / 2.0)
        .min_size(BUTTON_SIZE);
        if ui.add(reset).clicked() {
            actions.push(CardUiAction::Reset);
        }
    });
}

/// Horizontal row centered in the available width
fn centered_row(ui: &mut egui::Ui, content_width: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        let padding = ((ui.available_width() - content_width) / 2.0).max(0.0);
        ui.add_space(padding);
        add_contents(ui);
    });
}
