//! Fire-and-forget user notifications.
//!
//! The timer and the note pad report what happened as plain [`Notification`]
//! values; presentation (toast, status line, stdout) is up to whichever
//! [`NotificationSink`] receives them.

use serde::{Deserialize, Serialize};

use crate::features::timer::PhaseEvent;

/// How prominently a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Routine information.
    #[default]
    Info,
    /// Something finished well.
    Success,
    /// Something was removed or needs attention.
    Warning,
}

/// A one-way message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short headline.
    pub title: String,
    /// One-line detail.
    pub description: String,
    /// Presentation hint.
    pub severity: Severity,
}

impl Notification {
    /// Create an info notification.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    /// Create a success notification.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Success,
        }
    }

    /// Create a warning notification.
    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Warning,
        }
    }
}

impl From<PhaseEvent> for Notification {
    fn from(event: PhaseEvent) -> Self {
        match event {
            PhaseEvent::FocusComplete { sessions } => Self::success(
                "Focus session complete!",
                format!("Session {sessions} finished. Time for a break!"),
            ),
            PhaseEvent::BreakComplete => {
                Self::info("Break finished!", "Back to studying. Stay focused!")
            }
            PhaseEvent::FocusSkipped { .. } => {
                Self::info("Session skipped", "Heading into a break.")
            }
            PhaseEvent::BreakSkipped => Self::info("Break skipped", "Back to the books!"),
        }
    }
}

/// Receiver for fire-and-forget notifications.
pub trait NotificationSink {
    /// Present a notification. Must not fail; delivery is best-effort.
    fn notify(&mut self, notification: Notification);
}

/// A sink that remembers everything it receives. Useful in tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    /// Notifications received so far, oldest first.
    pub received: Vec<Notification>,
}

impl NotificationSink for CollectingSink {
    fn notify(&mut self, notification: Notification) {
        self.received.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_complete_message_counts_session() {
        let n = Notification::from(PhaseEvent::FocusComplete { sessions: 3 });
        assert_eq!(n.title, "Focus session complete!");
        assert!(n.description.contains("Session 3"));
        assert_eq!(n.severity, Severity::Success);
    }

    #[test]
    fn test_skip_and_expiry_messages_differ() {
        let complete = Notification::from(PhaseEvent::FocusComplete { sessions: 1 });
        let skipped = Notification::from(PhaseEvent::FocusSkipped { sessions: 1 });
        assert_ne!(complete.title, skipped.title);

        let break_complete = Notification::from(PhaseEvent::BreakComplete);
        let break_skipped = Notification::from(PhaseEvent::BreakSkipped);
        assert_ne!(break_complete.title, break_skipped.title);
    }

    #[test]
    fn test_collecting_sink() {
        let mut sink = CollectingSink::default();
        sink.notify(Notification::info("a", "b"));
        sink.notify(Notification::warning("c", "d"));
        assert_eq!(sink.received.len(), 2);
        assert_eq!(sink.received[1].severity, Severity::Warning);
    }
}
