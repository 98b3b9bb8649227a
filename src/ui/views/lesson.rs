use crate::app::HubApp;
use crate::model::SectionId;
use crate::ui::layout::scroll_panel;
use egui::{Button, Context, Frame, RichText};
use egui_commonmark::CommonMarkViewer;

pub fn ui_lesson(app: &mut HubApp, ctx: &Context, section: SectionId) {
    // Se clona para poder prestar `cm_cache` en mutable mientras se pinta
    let Some(lesson) = app.lesson(section).cloned() else {
        scroll_panel(ctx, 800.0, |ui| {
            ui.label("No content available for this section.");
        });
        return;
    };

    scroll_panel(ctx, 800.0, |ui| {
        ui.add_space(12.0);
        ui.heading(RichText::new(section.title()).size(26.0).strong());
        ui.add_space(6.0);
        CommonMarkViewer::new().show(ui, &mut app.cm_cache, &lesson.intro);
        ui.add_space(12.0);

        // Tarjetas con pestañas: solo una visible por tarjeta
        for (ci, card) in lesson.cards.iter().enumerate() {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.strong(card.title.as_str());
                let active = app
                    .active_tab(section, ci)
                    .min(card.tabs.len().saturating_sub(1));
                ui.horizontal(|ui| {
                    for (ti, tab) in card.tabs.iter().enumerate() {
                        if ui.selectable_label(ti == active, tab.label.as_str()).clicked() {
                            app.select_tab(section, ci, ti);
                        }
                    }
                });
                if let Some(tab) = card.tabs.get(active) {
                    CommonMarkViewer::new().show(ui, &mut app.cm_cache, &tab.body);
                }
            });
            ui.add_space(8.0);
        }

        for snippet in &lesson.snippets {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.strong(snippet.label.as_str());
                if ui.small_button("📋 Copy").clicked() {
                    ui.ctx().copy_text(snippet.code.clone());
                    app.code_copied();
                }
            });
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.monospace(snippet.code.trim_end());
            });
        }

        if !lesson.memory_hooks.is_empty() {
            ui.add_space(10.0);
            ui.horizontal_wrapped(|ui| {
                ui.label("Memory hooks:");
                for concept in &lesson.memory_hooks {
                    if ui.button(format!("💡 {concept}")).clicked() {
                        app.show_memory_hook(concept);
                    }
                }
            });
        }

        ui.add_space(16.0);
        ui.separator();
        if app.navigator.is_completed(section) {
            ui.label(RichText::new("✅ Section completed").strong());
        } else if ui
            .add_sized([220.0, 36.0], Button::new("✔ Mark as complete"))
            .clicked()
        {
            app.mark_section_complete(section);
        }
        ui.add_space(16.0);
    });
}
