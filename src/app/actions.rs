use super::*;

impl HubApp {
    /// Respuesta a la pregunta actual. Se puede cambiar tantas veces como se quiera.
    pub fn select_option(&mut self, option: usize) {
        if self.quiz_phase != QuizPhase::Answering {
            return;
        }
        match self.quiz.select_current(option) {
            Ok(feedback) => self.last_feedback = Some(feedback),
            Err(e) => self.report_error(&e),
        }
    }

    pub fn next_question(&mut self) {
        self.move_question(Direction::Next);
    }

    pub fn previous_question(&mut self) {
        self.move_question(Direction::Previous);
    }

    fn move_question(&mut self, direction: Direction) {
        if self.quiz.advance(direction) {
            // al volver a una pregunta respondida se repinta su corrección
            self.last_feedback = self.quiz.feedback_for(self.quiz.current_index());
        }
    }

    pub fn submit_quiz(&mut self) -> QuizResults {
        let results = self.quiz.submit();
        self.quiz_phase = QuizPhase::Results(results);
        self.mark_section_complete(SectionId::Quiz);
        results
    }

    pub fn show_memory_hook(&mut self, concept: &str) {
        let hook = self.content.memory_hook(concept).map(str::to_owned);
        match hook {
            Some(text) => self.notify(format!("💡 Memory Hook: {text}"), NotificationKind::Info),
            None => log::warn!("Unknown memory hook: {concept}"),
        }
    }

    /// La UI copia al portapapeles; aquí solo el aviso.
    pub fn code_copied(&mut self) {
        self.notify("Code copied to clipboard!", NotificationKind::Success);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        log::debug!("Theme: {:?}", self.theme);
    }

    pub fn select_tab(&mut self, section: SectionId, card: usize, tab: usize) {
        self.active_tabs.insert((section, card), tab);
    }

    pub fn active_tab(&self, section: SectionId, card: usize) -> usize {
        self.active_tabs.get(&(section, card)).copied().unwrap_or(0)
    }
}
