// src/navigator.rs

use crate::model::SectionId;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::sync::mpsc::{Receiver, Sender, channel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub current_section: SectionId,
    pub completed_sections: BTreeSet<SectionId>,
    /// Mismas secciones que `completed_sections`, en el orden en que se completaron.
    pub completion_order: Vec<SectionId>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_section: SectionId::Home,
            completed_sections: BTreeSet::new(),
            completion_order: Vec::new(),
        }
    }
}

/// Evento emitido en cada navegación correcta.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVisit {
    pub section: SectionId,
    pub timestamp: DateTime<Utc>,
}

#[derive(Default)]
pub struct SectionNavigator {
    state: NavigationState,
    subscribers: Vec<Sender<SectionVisit>>,
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current(&self) -> SectionId {
        self.state.current_section
    }

    pub fn completed(&self) -> &BTreeSet<SectionId> {
        &self.state.completed_sections
    }

    pub fn completion_order(&self) -> &[SectionId] {
        &self.state.completion_order
    }

    pub fn is_completed(&self, section: SectionId) -> bool {
        self.state.completed_sections.contains(&section)
    }

    /// Suscripción a los eventos de visita (analítica, logs...)
    pub fn subscribe(&mut self) -> Receiver<SectionVisit> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn navigate(&mut self, section: SectionId) {
        self.state.current_section = section;
        log::debug!("Navigating to {section}");

        let visit = SectionVisit {
            section,
            timestamp: Utc::now(),
        };
        // Los receptores cerrados se descartan
        self.subscribers.retain(|tx| tx.send(visit.clone()).is_ok());
    }

    /// Igual que [`SectionNavigator::navigate`] pero desde un identificador de texto.
    /// Un id desconocido no hace nada.
    pub fn navigate_by_name(&mut self, name: &str) -> bool {
        match name.parse::<SectionId>() {
            Ok(section) => {
                self.navigate(section);
                true
            }
            Err(_) => {
                log::warn!("Unknown section '{name}', ignored");
                false
            }
        }
    }

    /// Devuelve `true` solo si la sección no estaba ya completada.
    pub fn mark_complete(&mut self, section: SectionId) -> bool {
        if !section.is_tracked() {
            log::warn!("Section {section} does not count towards progress");
            return false;
        }
        let inserted = self.state.completed_sections.insert(section);
        if inserted {
            self.state.completion_order.push(section);
            log::info!(
                "Section {section} completed ({:.0}%)",
                self.progress_percentage()
            );
        }
        inserted
    }

    pub fn progress_percentage(&self) -> f64 {
        let total = SectionId::TRACKED.len();
        (self.state.completed_sections.len() * 100) as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home_with_nothing_completed() {
        let nav = SectionNavigator::new();
        assert_eq!(nav.current(), SectionId::Home);
        assert!(nav.completed().is_empty());
        assert_eq!(nav.progress_percentage(), 0.0);
    }

    #[test]
    fn unknown_section_is_a_no_op() {
        let mut nav = SectionNavigator::new();
        nav.navigate(SectionId::Tools);
        assert!(!nav.navigate_by_name("pricing"));
        assert_eq!(nav.current(), SectionId::Tools);
        assert!(nav.navigate_by_name("glossary"));
        assert_eq!(nav.current(), SectionId::Glossary);
    }

    #[test]
    fn mark_complete_is_idempotent() {
        let mut nav = SectionNavigator::new();
        assert!(nav.mark_complete(SectionId::Basics));
        assert!(!nav.mark_complete(SectionId::Basics));
        assert_eq!(nav.completed().len(), 1);
        assert_eq!(nav.completion_order(), [SectionId::Basics]);
    }

    #[test]
    fn completion_order_follows_the_user() {
        let mut nav = SectionNavigator::new();
        nav.mark_complete(SectionId::Quiz);
        nav.mark_complete(SectionId::Overview);
        nav.mark_complete(SectionId::Quiz);
        assert_eq!(nav.completion_order(), [SectionId::Quiz, SectionId::Overview]);
    }

    #[test]
    fn untracked_sections_are_not_recorded() {
        let mut nav = SectionNavigator::new();
        assert!(!nav.mark_complete(SectionId::Glossary));
        assert!(!nav.mark_complete(SectionId::Home));
        assert!(nav.completed().is_empty());
    }

    #[test]
    fn progress_counts_tracked_sections() {
        let mut nav = SectionNavigator::new();
        for sec in SectionId::TRACKED {
            nav.mark_complete(sec);
        }
        assert_eq!(nav.progress_percentage(), 100.0);
    }

    #[test]
    fn visits_are_sent_to_every_subscriber() {
        let mut nav = SectionNavigator::new();
        let a = nav.subscribe();
        let b = nav.subscribe();
        nav.navigate(SectionId::Quiz);
        assert_eq!(a.try_recv().unwrap().section, SectionId::Quiz);
        assert_eq!(b.try_recv().unwrap().section, SectionId::Quiz);
        assert!(a.try_recv().is_err());
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut nav = SectionNavigator::new();
        let rx = nav.subscribe();
        drop(rx);
        nav.navigate(SectionId::Basics);
        assert!(nav.subscribers.is_empty());
    }

    #[test]
    fn ignored_navigation_emits_nothing() {
        let mut nav = SectionNavigator::new();
        let rx = nav.subscribe();
        nav.navigate_by_name("nowhere");
        assert!(rx.try_recv().is_err());
    }
}
