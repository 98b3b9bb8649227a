// src/quiz.rs

use crate::error::{HubError, Result};
use crate::model::Question;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Estado mutable del quiz. Solo lo modifica [`QuizEngine`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizState {
    pub current_index: usize,
    /// pregunta -> opción elegida (disperso)
    pub answers: BTreeMap<usize, usize>,
    pub score: usize,
}

/// Lo que necesita la vista para pintar la corrección de una respuesta.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub selected: usize,
    pub correct_index: usize,
    pub explanation: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl ScoreBand {
    /// Cada banda incluye su límite inferior.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            ScoreBand::Excellent
        } else if percentage >= 70.0 {
            ScoreBand::Good
        } else if percentage >= 50.0 {
            ScoreBand::Average
        } else {
            ScoreBand::NeedsImprovement
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Average => "average",
            ScoreBand::NeedsImprovement => "needs-improvement",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "🌟 Excellent! You have mastered MongoDB concepts!",
            ScoreBand::Good => "👍 Great job! You have a solid understanding of MongoDB.",
            ScoreBand::Average => "📚 Good effort! Review the concepts and try again.",
            ScoreBand::NeedsImprovement => {
                "🔄 Keep learning! Review the lessons and take the quiz again."
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub band: ScoreBand,
}

impl QuizResults {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            (score * 100) as f64 / total as f64
        };
        Self {
            score,
            total,
            percentage,
            band: ScoreBand::from_percentage(percentage),
        }
    }
}

pub struct QuizEngine {
    questions: Vec<Question>,
    state: QuizState,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(HubError::EmptyQuiz);
        }
        Ok(Self {
            questions,
            state: QuizState::default(),
        })
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Marcador en vivo (orientativo). El bueno es el de [`QuizEngine::submit`].
    pub fn score(&self) -> usize {
        self.state.score
    }

    pub fn answer_for(&self, index: usize) -> Option<usize> {
        self.state.answers.get(&index).copied()
    }

    pub fn load_question(&self, index: usize) -> Result<&Question> {
        self.questions.get(index).ok_or(HubError::OutOfRange {
            index,
            total: self.questions.len(),
        })
    }

    pub fn current_question(&self) -> &Question {
        // current_index siempre está dentro de rango
        &self.questions[self.state.current_index]
    }

    pub fn select_option(&mut self, index: usize, option: usize) -> Result<AnswerFeedback> {
        let question = self.load_question(index)?;
        if option >= question.options.len() {
            return Err(HubError::InvalidOption {
                index,
                option,
                count: question.options.len(),
            });
        }

        let correct_index = question.correct_index;
        let is_correct = option == correct_index;
        let explanation = question.explanation.clone();

        let previous = self.state.answers.insert(index, option);
        let was_correct = previous == Some(correct_index);
        if is_correct && !was_correct {
            self.state.score += 1;
        } else if !is_correct && was_correct {
            self.state.score = self.state.score.saturating_sub(1);
        }

        log::debug!(
            "Question {} -> option {} ({})",
            index + 1,
            option,
            if is_correct { "correct" } else { "incorrect" }
        );

        Ok(AnswerFeedback {
            is_correct,
            selected: option,
            correct_index,
            explanation,
        })
    }

    pub fn select_current(&mut self, option: usize) -> Result<AnswerFeedback> {
        self.select_option(self.state.current_index, option)
    }

    /// Feedback de una pregunta ya respondida (al volver a ella)
    pub fn feedback_for(&self, index: usize) -> Option<AnswerFeedback> {
        let question = self.questions.get(index)?;
        let selected = self.answer_for(index)?;
        Some(AnswerFeedback {
            is_correct: selected == question.correct_index,
            selected,
            correct_index: question.correct_index,
            explanation: question.explanation.clone(),
        })
    }

    /// Mueve el índice ±1. Fuera de rango no hace nada; devuelve si se movió.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let current = self.state.current_index;
        let target = match direction {
            Direction::Next if current + 1 < self.questions.len() => current + 1,
            Direction::Previous if current > 0 => current - 1,
            _ => return false,
        };
        self.state.current_index = target;
        true
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.current_index > 0
    }

    /// Gate de la UI: solo se avanza con la pregunta actual respondida.
    pub fn can_go_next(&self) -> bool {
        !self.is_last() && self.state.answers.contains_key(&self.state.current_index)
    }

    pub fn is_last(&self) -> bool {
        self.state.current_index + 1 == self.questions.len()
    }

    /// Fracción (0..=1] para la barra de progreso del quiz
    pub fn progress_fraction(&self) -> f32 {
        (self.state.current_index + 1) as f32 / self.questions.len() as f32
    }

    /// Recalcula la puntuación desde cero. Idempotente.
    pub fn submit(&mut self) -> QuizResults {
        let score = self
            .questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.state.answers.get(i) == Some(&q.correct_index))
            .count();
        self.state.score = score;
        let results = QuizResults::new(score, self.questions.len());
        log::info!(
            "Quiz submitted: {}/{} ({:.0}%, {})",
            results.score,
            results.total,
            results.percentage,
            results.band.as_str()
        );
        results
    }

    pub fn restart(&mut self) {
        self.state = QuizState::default();
    }
}
