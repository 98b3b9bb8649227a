use super::*;
use crate::export::{ProgressExport, save_export};
use chrono::Utc;

impl HubApp {
    pub fn mark_section_complete(&mut self, section: SectionId) {
        if self.navigator.mark_complete(section) {
            self.notify(
                format!("🎉 {} completed!", section.title()),
                NotificationKind::Success,
            );
        }
    }

    pub fn progress_percentage(&self) -> f64 {
        self.navigator.progress_percentage()
    }

    pub fn progress_export(&self) -> ProgressExport {
        ProgressExport::new(
            self.navigator.completion_order(),
            self.quiz.score(),
            self.navigator.current(),
            Utc::now(),
        )
    }

    /// Exporta el progreso (fichero en nativo, descarga en web)
    pub fn export_progress(&mut self) {
        let export = self.progress_export();
        match save_export(&export, &self.config.export_file_name) {
            Ok(()) => self.notify("Progress exported successfully!", NotificationKind::Success),
            Err(e) => self.report_error(&e),
        }
    }
}
