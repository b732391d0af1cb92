//! [`NotificationSink`] backed by the freedesktop notification service.

use crate::notification::{Notification, Urgency};
use crate::traits::NotificationSink;
use log::debug;
use notify_rust::{Hint, Timeout};

/// Hint that dunst uses to replace an earlier popup with the same tag.
const STACK_TAG_HINT: &str = "x-dunst-stack-tag";

/// Sends notifications over the session bus.
pub struct DesktopNotifier;

/// Errors from the notification service.
#[derive(Debug, thiserror::Error)]
#[error("notification service error: {0}")]
pub struct NotifyError(String);

impl DesktopNotifier {
    /// Ask the notification server to identify itself.
    ///
    /// This is the startup capability check for the notify side: if no
    /// server answers, nothing can be displayed.
    pub fn probe() -> Result<Self, NotifyError> {
        let info = notify_rust::get_server_information()
            .map_err(|e| NotifyError(format!("server information: {}", e)))?;
        debug!("notification server: {} {}", info.name, info.version);
        Ok(Self)
    }
}

fn urgency(u: Urgency) -> notify_rust::Urgency {
    match u {
        Urgency::Low => notify_rust::Urgency::Low,
        Urgency::Normal => notify_rust::Urgency::Normal,
        Urgency::Critical => notify_rust::Urgency::Critical,
    }
}

/// Translate a [`Notification`] into a D-Bus notification.
fn build(n: &Notification) -> notify_rust::Notification {
    let mut out = notify_rust::Notification::new();
    out.summary(&n.title)
        .body(&n.body)
        .hint(Hint::Category(n.category.clone()))
        .hint(Hint::Custom(STACK_TAG_HINT.into(), n.category.clone()))
        .urgency(urgency(n.urgency))
        .timeout(Timeout::Milliseconds(n.duration_ms));
    out
}

impl NotificationSink for DesktopNotifier {
    type Error = NotifyError;

    fn notify(&self, notification: &Notification) -> Result<(), Self::Error> {
        build(notification)
            .show()
            .map_err(|e| NotifyError(format!("show: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Notification {
        Notification {
            title: "Workspaces".into(),
            category: "workspaces".into(),
            urgency: Urgency::Critical,
            duration_ms: 3000,
            body: "1 [2] 3".into(),
        }
    }

    #[test]
    fn builds_summary_and_body() {
        let n = build(&sample());
        assert_eq!(n.summary, "Workspaces");
        assert_eq!(n.body, "1 [2] 3");
    }

    #[test]
    fn carries_category() {
        let n = build(&sample());
        assert!(n.hints.contains(&Hint::Category("workspaces".into())));
    }

    #[test]
    fn maps_urgency() {
        let n = build(&sample());
        assert!(n
            .hints
            .contains(&Hint::Urgency(notify_rust::Urgency::Critical)));
        assert_eq!(urgency(Urgency::Low), notify_rust::Urgency::Low);
    }
}
