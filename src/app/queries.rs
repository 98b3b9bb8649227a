use super::*;
use crate::glossary::find_term;
use crate::model::{GlossaryTerm, Lesson};

impl HubApp {
    pub fn lesson(&self, section: SectionId) -> Option<&Lesson> {
        self.content.lesson(section)
    }

    pub fn term_details(&self, name: &str) -> Option<&GlossaryTerm> {
        find_term(&self.content.glossary, name)
    }

    /// Término del modal abierto, si lo hay
    pub fn opened_term(&self) -> Option<&GlossaryTerm> {
        self.open_term
            .as_deref()
            .and_then(|name| self.term_details(name))
    }

    pub fn visible_terms(&self) -> Vec<&GlossaryTerm> {
        self.glossary_query.apply(&self.content.glossary)
    }
}
