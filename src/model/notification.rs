//! Notification model
//!
//! Short-lived feedback shown in the title bar (logged changes, opened documents).

use std::time::{Duration, Instant};

/// How long a notification stays visible
const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Something was written (green)
    Success,
    /// Informational (cyan)
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= NOTIFICATION_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_kinds() {
        assert_eq!(Notification::success("ok").kind, NotificationKind::Success);
        assert_eq!(Notification::info("fyi").kind, NotificationKind::Info);
    }

    #[test]
    fn test_notification_not_expired_immediately() {
        assert!(!Notification::success("Logged").is_expired());
    }

    #[test]
    fn test_notification_expires() {
        let mut n = Notification::info("old");
        if let Some(past) = Instant::now().checked_sub(Duration::from_secs(6)) {
            n.created_at = past;
            assert!(n.is_expired());
        }
    }
}
