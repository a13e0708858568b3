// src/notify.rs
use std::time::{Duration, Instant};

const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn title(self) -> &'static str {
        match self {
            Level::Info => "Info",
            Level::Success => "Sucesso",
            Level::Warning => "Aviso",
            Level::Error => "Erro",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: Level,
    pub message: String,
    pub created: Instant,
}

/// Append-only toast surface shared by both controllers. Toasts expire on
/// their own; nothing here is fatal to the app.
#[derive(Debug, Default)]
pub struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: Level, message: impl Into<String>) {
        let message = message.into();
        match level {
            Level::Error => tracing::error!(target: "arqv::notify", "{}", message),
            Level::Warning => tracing::warn!(target: "arqv::notify", "{}", message),
            _ => tracing::info!(target: "arqv::notify", "{}", message),
        }
        self.toasts.push(Toast {
            level,
            message,
            created: Instant::now(),
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Level::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Level::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Level::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Level::Error, message);
    }

    /// Drop expired toasts. Called once per frame.
    pub fn retain(&mut self, now: Instant) {
        self.toasts
            .retain(|t| now.duration_since(t.created) < TOAST_TTL);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_ttl() {
        let mut notifications = Notifications::new();
        notifications.error("backend unreachable");
        assert!(!notifications.is_empty());

        let later = Instant::now() + TOAST_TTL + Duration::from_millis(1);
        notifications.retain(later);
        assert!(notifications.is_empty());
    }

    #[test]
    fn toasts_survive_before_ttl() {
        let mut notifications = Notifications::new();
        notifications.success("análise concluída");
        notifications.retain(Instant::now());
        assert_eq!(notifications.iter().count(), 1);
        assert_eq!(notifications.iter().next().unwrap().level, Level::Success);
    }
}
