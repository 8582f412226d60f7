//! Toast notifications
//!
//! The core only describes notifications; rendering them is the UI's job.

use serde::{Deserialize, Serialize};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn new(
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let auto_dismiss_ms = match notification_type {
            NotificationType::Success | NotificationType::Info => Some(3000),
            NotificationType::Warning => Some(5000),
            NotificationType::Error => Some(8000),
        };

        Self {
            notification_type,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms,
        }
    }
}

/// Sink for user-visible notifications
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, kind: NotificationType, title: &str, message: &str);
}

/// Sink for navigation requests
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, path: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_fields() {
        let n = Notification::new(NotificationType::Success, "Logged out", "bye");
        assert_eq!(n.notification_type, NotificationType::Success);
        assert_eq!(n.title, "Logged out");
        assert_eq!(n.message, "bye");
        assert_eq!(n.auto_dismiss_ms, Some(3000));

        let n = Notification::new(NotificationType::Error, "Login failed", "nope");
        assert_eq!(n.auto_dismiss_ms, Some(8000));
    }

    #[test]
    fn test_every_notification_is_transient() {
        for kind in [
            NotificationType::Success,
            NotificationType::Error,
            NotificationType::Warning,
            NotificationType::Info,
        ] {
            assert!(Notification::new(kind, "t", "m").auto_dismiss_ms.is_some());
        }
    }
}
