use crate::config::HubConfig;
use crate::data::ContentStore;
use crate::error::Result;
use crate::glossary::GlossaryQuery;
use crate::model::{SectionId, Theme};
use crate::navigator::{SectionNavigator, SectionVisit};
use crate::notifications::{NotificationCenter, NotificationKind};
use crate::quiz::{AnswerFeedback, Direction, QuizEngine, QuizResults};
use egui_commonmark::CommonMarkCache;
use std::collections::HashMap;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod updates;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{GlossaryCard, NavLink, OptionState, OptionView, QuizView};

/// Qué muestra la sección del quiz
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuizPhase {
    Answering,
    Results(QuizResults),
}

/// Controlador único: todo el estado vive aquí y solo cambia por sus métodos.
pub struct HubApp {
    pub config: HubConfig,
    pub content: ContentStore,
    pub quiz: QuizEngine,
    pub navigator: SectionNavigator,
    pub notifications: NotificationCenter,
    pub theme: Theme,
    pub quiz_phase: QuizPhase,
    pub glossary_query: GlossaryQuery,
    /// Término abierto en el modal de detalles
    pub open_term: Option<String>,
    /// (sección, tarjeta) -> pestaña visible
    pub active_tabs: HashMap<(SectionId, usize), usize>,
    pub cm_cache: CommonMarkCache,
    last_feedback: Option<AnswerFeedback>,
    visits: Receiver<SectionVisit>,
    now: f64,
}

impl HubApp {
    pub fn new(config: HubConfig, content: ContentStore) -> Result<Self> {
        let quiz = QuizEngine::new(content.questions.clone())?;
        let mut navigator = SectionNavigator::new();
        let visits = navigator.subscribe();
        let theme = if config.start_dark {
            Theme::Dark
        } else {
            Theme::Light
        };
        let notifications = NotificationCenter::new(config.notification_ttl_secs);

        Ok(Self {
            config,
            content,
            quiz,
            navigator,
            notifications,
            theme,
            quiz_phase: QuizPhase::Answering,
            glossary_query: GlossaryQuery::default(),
            open_term: None,
            active_tabs: HashMap::new(),
            cm_cache: CommonMarkCache::default(),
            last_feedback: None,
            visits,
            now: 0.0,
        })
    }

    /// Config + contenido embebidos
    pub fn embedded() -> Result<Self> {
        Self::new(HubConfig::load()?, ContentStore::embedded()?)
    }

    pub fn current_section(&self) -> SectionId {
        self.navigator.current()
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub(crate) fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let now = self.now;
        self.notifications.push(message, kind, now);
    }
}
