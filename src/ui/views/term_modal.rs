use crate::app::HubApp;
use egui::{Align2, Context};

/// Modal con la definición y el ejemplo de un término del glosario.
pub fn ui_term_modal(app: &mut HubApp, ctx: &Context) {
    let Some(term) = app.opened_term().cloned() else {
        return;
    };

    let mut open = true;
    let mut close_clicked = false;
    egui::Window::new(term.term.clone())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.label(term.definition.as_str());
            if let Some(example) = &term.example {
                ui.add_space(8.0);
                ui.strong("Example:");
                ui.code(example.as_str());
            }
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if !open || close_clicked {
        app.close_modal();
    }
}
