// src/view_models.rs

use crate::model::{Category, SectionId};
use crate::quiz::AnswerFeedback;

#[derive(Clone, Debug)]
pub struct NavLink {
    pub section: SectionId,
    pub active: bool,
    pub completed: bool,
}

impl NavLink {
    pub fn label(&self) -> String {
        if self.completed {
            format!("{} ✅", self.section.title())
        } else {
            self.section.title().to_owned()
        }
    }
}

/// Foto de la pregunta actual para pintar el quiz.
#[derive(Clone, Debug)]
pub struct QuizView {
    pub number: usize, // 1-based
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub feedback: Option<AnswerFeedback>,
    pub live_score: usize,
    pub progress: f32,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub is_last: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug)]
pub struct OptionView {
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug)]
pub struct GlossaryCard {
    pub term: String,
    pub definition: String,
    pub category: Category,
}

impl GlossaryCard {
    pub fn category_label(&self) -> &'static str {
        self.category.as_str()
    }
}

/// Estado de cada opción a partir del feedback (como las clases selected/correct/incorrect).
pub fn option_states(count: usize, feedback: Option<&AnswerFeedback>) -> Vec<OptionState> {
    (0..count)
        .map(|i| match feedback {
            None => OptionState::Neutral,
            Some(fb) if i == fb.correct_index => OptionState::Correct,
            Some(fb) if i == fb.selected => OptionState::Incorrect,
            Some(_) => OptionState::Neutral,
        })
        .collect()
}
