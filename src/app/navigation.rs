use super::*;

impl HubApp {
    pub fn navigate_to_section(&mut self, section: SectionId) {
        self.navigator.navigate(section);
    }

    /// Desde un id de texto; los desconocidos se ignoran
    pub fn navigate_by_name(&mut self, name: &str) -> bool {
        self.navigator.navigate_by_name(name)
    }

    pub fn start_learning(&mut self) {
        self.navigate_to_section(SectionId::Overview);
    }

    /// Alt + dígito (1..=6)
    pub fn handle_shortcut_digit(&mut self, digit: u8) {
        if let Some(section) = SectionId::for_shortcut_digit(digit) {
            self.navigate_to_section(section);
        }
    }

    /// Flechas izquierda/derecha: solo en el quiz y si el botón correspondiente está activo.
    pub fn handle_arrow(&mut self, direction: Direction) {
        if self.current_section() != SectionId::Quiz || self.quiz_phase != QuizPhase::Answering {
            return;
        }
        let enabled = match direction {
            Direction::Previous => self.quiz.can_go_previous(),
            Direction::Next => self.quiz.can_go_next(),
        };
        if !enabled {
            return;
        }
        match direction {
            Direction::Previous => self.previous_question(),
            Direction::Next => self.next_question(),
        }
    }

    pub fn open_term_details(&mut self, name: &str) {
        if self.term_details(name).is_some() {
            self.open_term = Some(name.to_owned());
        }
    }

    pub fn close_modal(&mut self) {
        self.open_term = None;
    }
}
