use super::*;
use crate::error::{GENERIC_ERROR_MESSAGE, HubError};

impl HubApp {
    pub fn restart_quiz(&mut self) {
        self.quiz.restart();
        self.quiz_phase = QuizPhase::Answering;
        self.last_feedback = None;
        log::debug!("Quiz restarted");
    }

    /// Cajón de sastre: se registra y se avisa al usuario. No hay reintento.
    pub fn report_error(&mut self, error: &HubError) {
        log::error!("Application error: {error}");
        self.notify(GENERIC_ERROR_MESSAGE, NotificationKind::Error);
    }
}

/// Registra los pánicos con `log` antes de abortar.
pub fn install_panic_logger() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("Application error: {info}");
        default_hook(info);
    }));
}
