//! Controller-level tests: the operations the UI calls, without rendering.

use mongo_hub::HubApp;
use mongo_hub::app::QuizPhase;
use mongo_hub::error::{GENERIC_ERROR_MESSAGE, HubError};
use mongo_hub::model::{SectionId, Theme};
use mongo_hub::notifications::NotificationKind;
use mongo_hub::quiz::Direction;

fn app() -> HubApp {
    HubApp::embedded().unwrap()
}

fn messages(app: &HubApp) -> Vec<String> {
    app.notifications
        .active()
        .iter()
        .map(|n| n.message.clone())
        .collect()
}

#[test]
fn starts_at_home() {
    let app = app();
    assert_eq!(app.current_section(), SectionId::Home);
    assert_eq!(app.progress_percentage(), 0.0);
    assert_eq!(app.theme, Theme::Dark);
}

#[test]
fn shortcut_digits_navigate() {
    let mut app = app();
    app.handle_shortcut_digit(5);
    assert_eq!(app.current_section(), SectionId::Quiz);
    app.handle_shortcut_digit(6);
    assert_eq!(app.current_section(), SectionId::Glossary);
    app.handle_shortcut_digit(9);
    assert_eq!(app.current_section(), SectionId::Glossary);
}

#[test]
fn arrows_only_work_in_the_quiz_and_when_enabled() {
    let mut app = app();
    app.select_option(0);
    app.handle_arrow(Direction::Next);
    assert_eq!(app.quiz.current_index(), 0, "arrows do nothing outside the quiz");

    app.navigate_to_section(SectionId::Quiz);
    app.restart_quiz();
    app.handle_arrow(Direction::Next);
    assert_eq!(app.quiz.current_index(), 0, "cannot advance without an answer");

    app.select_option(1);
    app.handle_arrow(Direction::Next);
    assert_eq!(app.quiz.current_index(), 1);
    app.handle_arrow(Direction::Previous);
    assert_eq!(app.quiz.current_index(), 0);
    app.handle_arrow(Direction::Previous);
    assert_eq!(app.quiz.current_index(), 0);
}

#[test]
fn revisiting_an_answered_question_restores_feedback() {
    let mut app = app();
    app.select_option(3);
    app.next_question();
    assert!(app.quiz_view().feedback.is_none());
    app.previous_question();
    let view = app.quiz_view();
    assert_eq!(view.feedback.unwrap().selected, 3);
}

#[test]
fn submit_shows_results_and_completes_quiz() {
    let mut app = app();
    app.tick(1.0);
    let results = app.submit_quiz();
    assert_eq!(app.quiz_phase, QuizPhase::Results(results));
    assert!(app.navigator.is_completed(SectionId::Quiz));
    assert_eq!(app.progress_percentage(), 20.0);
    assert!(messages(&app).contains(&"🎉 Practice Quiz completed!".to_owned()));

    // en resultados no se aceptan respuestas
    app.select_option(0);
    assert!(app.quiz.state().answers.is_empty());

    app.restart_quiz();
    assert_eq!(app.quiz_phase, QuizPhase::Answering);
}

#[test]
fn completion_notification_only_once() {
    let mut app = app();
    app.mark_section_complete(SectionId::Basics);
    app.mark_section_complete(SectionId::Basics);
    let count = messages(&app)
        .iter()
        .filter(|m| m.contains("Basic Operations"))
        .count();
    assert_eq!(count, 1);
}

#[test]
fn notifications_expire_on_tick() {
    let mut app = app();
    app.tick(10.0);
    app.code_copied();
    app.tick(12.0);
    assert_eq!(app.notifications.active().len(), 1);
    app.tick(13.5);
    assert!(app.notifications.is_empty());
}

#[test]
fn errors_become_a_generic_notification() {
    let mut app = app();
    app.report_error(&HubError::Export("disk full".into()));
    let n = &app.notifications.active()[0];
    assert_eq!(n.kind, NotificationKind::Error);
    assert_eq!(n.message, GENERIC_ERROR_MESSAGE);
}

#[test]
fn memory_hooks() {
    let mut app = app();
    app.show_memory_hook("indexes");
    app.show_memory_hook("does-not-exist");
    assert_eq!(
        messages(&app),
        ["💡 Memory Hook: INDEX = Instant Navigation for Database EXcellence"]
    );
}

#[test]
fn visits_are_drained_each_tick() {
    let mut app = app();
    app.navigate_to_section(SectionId::Basics);
    app.navigate_to_section(SectionId::Tools);
    assert_eq!(app.drain_visits(), 2);
    assert_eq!(app.drain_visits(), 0);
}

#[test]
fn export_document_reflects_state() {
    let mut app = app();
    app.navigate_to_section(SectionId::Advanced);
    app.mark_section_complete(SectionId::Overview);
    app.select_option(app.quiz.current_question().correct_index);

    let export = app.progress_export();
    assert_eq!(export.completed_sections, [SectionId::Overview]);
    assert_eq!(export.quiz_score, 1);
    assert_eq!(export.current_section, SectionId::Advanced);

    let json: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();
    assert_eq!(json["currentSection"], "advanced");
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn export_lists_sections_in_completion_order() {
    let mut app = app();
    app.mark_section_complete(SectionId::Quiz);
    app.mark_section_complete(SectionId::Overview);

    let export = app.progress_export();
    assert_eq!(
        export.completed_sections,
        [SectionId::Quiz, SectionId::Overview]
    );
}

#[test]
fn term_modal_opens_only_for_known_terms() {
    let mut app = app();
    app.open_term_details("nonexistent");
    assert!(app.opened_term().is_none());
    app.open_term_details("sharding");
    assert_eq!(app.opened_term().unwrap().term, "Sharding");
    app.close_modal();
    app.close_modal();
    assert!(app.opened_term().is_none());
}

#[test]
fn lesson_tabs_default_to_first() {
    let mut app = app();
    assert_eq!(app.active_tab(SectionId::Basics, 0), 0);
    app.select_tab(SectionId::Basics, 0, 1);
    assert_eq!(app.active_tab(SectionId::Basics, 0), 1);
    assert_eq!(app.active_tab(SectionId::Basics, 1), 0);
}

#[test]
fn theme_toggles() {
    let mut app = app();
    app.toggle_theme();
    assert_eq!(app.theme, Theme::Light);
}
