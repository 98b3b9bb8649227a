use crate::app::{HubApp, QuizPhase};
use crate::model::SectionId;
use crate::quiz::{QuizResults, ScoreBand};
use crate::ui::helpers::{option_button, two_button_row};
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, ProgressBar, RichText};

pub fn ui_quiz(app: &mut HubApp, ctx: &Context) {
    if let QuizPhase::Results(results) = app.quiz_phase {
        ui_results(app, ctx, results);
        return;
    }

    let view = app.quiz_view();
    centered_panel(ctx, 520.0, 650.0, |ui| {
        let panel_width = ui.available_width();
        ui.heading(SectionId::Quiz.title());
        ui.add_space(6.0);
        ui.add(
            ProgressBar::new(view.progress)
                .text(format!("Question {} of {}", view.number, view.total)),
        );
        ui.label(format!("Score: {}/{}", view.live_score, view.total));
        ui.add_space(10.0);

        ui.label(RichText::new(view.prompt.as_str()).size(18.0).strong());
        ui.add_space(8.0);

        for (i, option) in view.options.iter().enumerate() {
            if option_button(ui, option, panel_width) {
                app.select_option(i);
            }
            ui.add_space(4.0);
        }

        if let Some(fb) = &view.feedback {
            ui.add_space(6.0);
            let (text, color) = if fb.is_correct {
                ("✅ Correct!", Color32::from_rgb(33, 160, 90))
            } else {
                ("❌ Incorrect", Color32::from_rgb(200, 60, 60))
            };
            ui.label(RichText::new(text).strong().color(color));
            ui.label(format!("Explanation: {}", fb.explanation));
        }

        ui.add_space(10.0);
        // En la última pregunta "Next" se convierte en "Submit"
        let right = if view.is_last {
            ("Submit Quiz", true)
        } else {
            ("Next ➡", view.can_go_next)
        };
        let (prev, next) = two_button_row(ui, panel_width, ("⬅ Previous", view.can_go_previous), right);
        if prev {
            app.previous_question();
        }
        if next {
            if view.is_last {
                app.submit_quiz();
            } else {
                app.next_question();
            }
        }
    });
}

fn ui_results(app: &mut HubApp, ctx: &Context, results: QuizResults) {
    centered_panel(ctx, 320.0, 500.0, |ui| {
        let panel_width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading("Quiz Results");
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("{} / {}", results.score, results.total))
                    .size(32.0)
                    .strong(),
            );
            ui.label(format!("{}%", results.percentage.round()));
            ui.add_space(8.0);
            ui.label(
                RichText::new(results.band.message())
                    .strong()
                    .color(band_color(results.band)),
            );
            ui.add_space(16.0);
        });

        let (restart, review) = two_button_row(
            ui,
            panel_width,
            ("🔄 Restart Quiz", true),
            ("📚 Review lessons", true),
        );
        if restart {
            app.restart_quiz();
        }
        if review {
            app.navigate_to_section(SectionId::Overview);
        }
    });
}

fn band_color(band: ScoreBand) -> Color32 {
    match band {
        ScoreBand::Excellent => Color32::from_rgb(33, 160, 90),
        ScoreBand::Good => Color32::from_rgb(33, 128, 141),
        ScoreBand::Average => Color32::from_rgb(230, 129, 97),
        ScoreBand::NeedsImprovement => Color32::from_rgb(200, 60, 60),
    }
}
