mod helpers;
pub mod layout;
pub mod views;

use crate::app::HubApp;
use crate::model::{SectionId, Theme};
use crate::quiz::Direction;
use eframe::{App, Frame};
use egui::{Context, Key, Visuals};
use layout::{bottom_panel, notifications_overlay, top_panel};
use std::time::Duration;

const SHORTCUT_KEYS: [(Key, u8); 6] = [
    (Key::Num1, 1),
    (Key::Num2, 2),
    (Key::Num3, 3),
    (Key::Num4, 4),
    (Key::Num5, 5),
    (Key::Num6, 6),
];

impl App for HubApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.tick(ctx.input(|i| i.time));
        handle_keyboard(self, ctx);

        ctx.set_visuals(match self.theme {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        });

        // PANELES SUPERIOR (navegación) E INFERIOR (tema / exportar)
        top_panel(self, ctx);
        bottom_panel(self, ctx);

        // Dispatch por sección
        match self.current_section() {
            SectionId::Home => views::home::ui_home(self, ctx),
            section @ (SectionId::Overview
            | SectionId::Basics
            | SectionId::Advanced
            | SectionId::Tools) => views::lesson::ui_lesson(self, ctx, section),
            SectionId::Quiz => views::quiz::ui_quiz(self, ctx),
            SectionId::Glossary => views::glossary::ui_glossary(self, ctx),
        }

        views::term_modal::ui_term_modal(self, ctx);
        notifications_overlay(self, ctx);

        // los avisos caducan aunque no haya input
        if !self.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}

fn handle_keyboard(app: &mut HubApp, ctx: &Context) {
    let (digit, arrow, escape) = ctx.input(|i| {
        let digit = if i.modifiers.alt {
            SHORTCUT_KEYS
                .iter()
                .find(|(key, _)| i.key_pressed(*key))
                .map(|(_, d)| *d)
        } else {
            None
        };
        let arrow = if i.key_pressed(Key::ArrowLeft) {
            Some(Direction::Previous)
        } else if i.key_pressed(Key::ArrowRight) {
            Some(Direction::Next)
        } else {
            None
        };
        (digit, arrow, i.key_pressed(Key::Escape))
    });

    if let Some(d) = digit {
        app.handle_shortcut_digit(d);
    }
    if let Some(dir) = arrow {
        app.handle_arrow(dir);
    }
    if escape {
        app.close_modal();
    }
}
