// src/notifications.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    /// Segundos (reloj de egui) a partir de los cuales desaparece
    pub expires_at: f64,
}

/// Avisos temporales. `now` es siempre el reloj de la UI en segundos.
#[derive(Debug)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
    ttl: f64,
}

impl NotificationCenter {
    pub fn new(ttl_secs: f64) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            ttl: ttl_secs,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        log::debug!("Notification #{id} ({kind:?}): {message}");
        self.items.push(Notification {
            id,
            message,
            kind,
            expires_at: now + self.ttl,
        });
        id
    }

    /// Si ya no existe, no hace nada.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn prune(&mut self, now: f64) {
        self.items.retain(|n| n.expires_at > now);
    }

    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
