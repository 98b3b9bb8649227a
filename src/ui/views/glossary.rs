use crate::app::HubApp;
use crate::model::{Category, SectionId};
use crate::ui::helpers::category_chip;
use crate::ui::layout::scroll_panel;
use egui::{Context, Frame, Label, RichText, Sense, TextEdit};

pub fn ui_glossary(app: &mut HubApp, ctx: &Context) {
    scroll_panel(ctx, 800.0, |ui| {
        ui.add_space(12.0);
        ui.heading(RichText::new(SectionId::Glossary.title()).size(26.0).strong());
        ui.add_space(8.0);

        ui.add(
            TextEdit::singleline(&mut app.glossary_query.text)
                .hint_text("🔍 Search terms...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        // Filtros por categoría
        ui.horizontal(|ui| {
            if ui
                .selectable_label(app.glossary_query.category.is_none(), "All")
                .clicked()
            {
                app.glossary_query.category = None;
            }
            for category in Category::ALL {
                let selected = app.glossary_query.category == Some(category);
                if ui.selectable_label(selected, category.as_str()).clicked() {
                    app.glossary_query.category = Some(category);
                }
            }
        });
        ui.add_space(10.0);

        let cards = app.glossary_cards();
        if cards.is_empty() {
            ui.label("No terms match your search.");
            return;
        }

        let mut clicked = None;
        for card in &cards {
            let response = Frame::group(ui.style())
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.add(Label::new(RichText::new(card.term.as_str()).strong().size(16.0)));
                    ui.label(card.definition.as_str());
                    category_chip(ui, card.category_label());
                })
                .response
                .interact(Sense::click())
                .on_hover_text("Click for details");
            if response.clicked() {
                clicked = Some(card.term.clone());
            }
            ui.add_space(6.0);
        }

        if let Some(term) = clicked {
            app.open_term_details(&term);
        }
    });
}
