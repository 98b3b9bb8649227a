use crate::app::HubApp;
use crate::model::SectionId;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_home(app: &mut HubApp, ctx: &Context) {
    centered_panel(ctx, 380.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("🍃 MongoDB Learning Hub").size(28.0).strong());
            ui.add_space(10.0);
            ui.label("Learn MongoDB step by step: lessons, a practice quiz and a searchable glossary.");
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let btn_h = 40.0;

            if ui
                .add_sized([btn_w, btn_h], Button::new("▶ Start Learning"))
                .clicked()
            {
                app.start_learning();
            }
            ui.add_space(12.0);

            // Atajos a cada sección (mismo orden que Alt+1..6)
            for (i, section) in SectionId::SHORTCUTS.iter().enumerate() {
                let done = app.navigator.is_completed(*section);
                let label = format!(
                    "{}. {}{}",
                    i + 1,
                    section.title(),
                    if done { "  ✅" } else { "" }
                );
                if ui.add_sized([btn_w, 30.0], Button::new(label)).clicked() {
                    app.navigate_to_section(*section);
                }
            }

            ui.add_space(10.0);
            ui.label(format!(
                "Overall progress: {}%",
                app.progress_percentage().round()
            ));
        });
    });
}
