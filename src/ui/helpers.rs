// src/ui/helpers.rs
use crate::view_models::{OptionState, OptionView};
use egui::{Button, Color32, RichText, Ui, Vec2};

/// Botón de respuesta coloreado según la corrección.
pub fn option_button(ui: &mut Ui, option: &OptionView, width: f32) -> bool {
    let text = match option.state {
        OptionState::Correct => format!("✅ {}", option.text),
        OptionState::Incorrect => format!("❌ {}", option.text),
        OptionState::Neutral => option.text.clone(),
    };
    let mut button = Button::new(text).min_size(Vec2::new(width, 36.0));
    button = match option.state {
        OptionState::Correct => button.fill(Color32::from_rgb(26, 110, 60)),
        OptionState::Incorrect => button.fill(Color32::DARK_RED),
        OptionState::Neutral => button,
    };
    ui.add(button).clicked()
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(left.1, Button::new(left.0).min_size(Vec2::new(btn_w, 36.0)))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, Button::new(right.0).min_size(Vec2::new(btn_w, 36.0)))
            .clicked();
    });
    (clicked_left, clicked_right)
}

pub fn category_chip(ui: &mut Ui, label: &str) {
    ui.label(RichText::new(label).small().italics().weak());
}
