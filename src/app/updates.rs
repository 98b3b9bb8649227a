use super::*;

impl HubApp {
    /// Una vez por frame: reloj, avisos caducados y eventos de visita.
    pub fn tick(&mut self, now: f64) {
        self.now = now;
        self.notifications.prune(now);
        self.drain_visits();
    }

    /// Analítica: de momento solo deja constancia en el log.
    pub fn drain_visits(&mut self) -> usize {
        let mut count = 0;
        while let Ok(visit) = self.visits.try_recv() {
            log::info!(
                "section_visit section={} timestamp={}",
                visit.section,
                visit.timestamp.to_rfc3339()
            );
            count += 1;
        }
        count
    }
}
