use super::*;
use crate::view_models::option_states;

impl HubApp {
    pub fn nav_links(&self) -> Vec<NavLink> {
        let current = self.current_section();
        SectionId::ALL
            .iter()
            .map(|&section| NavLink {
                section,
                active: section == current,
                completed: self.navigator.is_completed(section),
            })
            .collect()
    }

    pub fn quiz_view(&self) -> QuizView {
        let question = self.quiz.current_question();
        let feedback = self.last_feedback.clone();
        let states = option_states(question.options.len(), feedback.as_ref());
        let options = question
            .options
            .iter()
            .zip(states)
            .map(|(text, state)| OptionView {
                text: text.clone(),
                state,
            })
            .collect();

        QuizView {
            number: self.quiz.current_index() + 1,
            total: self.quiz.len(),
            prompt: question.prompt.clone(),
            options,
            feedback,
            live_score: self.quiz.score(),
            progress: self.quiz.progress_fraction(),
            can_go_previous: self.quiz.can_go_previous(),
            can_go_next: self.quiz.can_go_next(),
            is_last: self.quiz.is_last(),
        }
    }

    pub fn glossary_cards(&self) -> Vec<GlossaryCard> {
        self.visible_terms()
            .into_iter()
            .map(|t| GlossaryCard {
                term: t.term.clone(),
                definition: t.definition.clone(),
                category: t.category,
            })
            .collect()
    }
}
