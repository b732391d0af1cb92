//! Core traits that decouple swayws from any specific window manager or
//! notification transport.
//!
//! The [`WorkspaceStatusReporter`](crate::reporter::WorkspaceStatusReporter)
//! only depends on these abstractions; concrete backends live in
//! [`sway`](crate::sway) and [`notify`](crate::notify).

use crate::notification::Notification;
use crate::workspace::WorkspaceEntry;

/// Abstraction over a window manager that can list its workspaces.
///
/// An implementation might talk to sway via IPC, or it might be a stub
/// used in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Return every workspace with its focus flag, in the window manager's
    /// own order.
    ///
    /// The result is not validated; the caller builds a
    /// [`WorkspaceSnapshot`](crate::workspace::WorkspaceSnapshot) from it.
    fn workspaces(&self) -> Result<Vec<WorkspaceEntry>, Self::Error>;
}

/// Something that can display a [`Notification`].
pub trait NotificationSink {
    /// The error type produced by this sink.
    type Error: std::error::Error + Send + 'static;

    /// Deliver `notification`.  Blocks until the sink has accepted it.
    fn notify(&self, notification: &Notification) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Urgency;
    use std::cell::RefCell;

    //  Mock WindowManager

    struct FixedWm(Vec<WorkspaceEntry>);

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    impl WindowManager for FixedWm {
        type Error = MockError;

        fn workspaces(&self) -> Result<Vec<WorkspaceEntry>, MockError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn mock_wm_returns_entries_in_order() {
        let wm = FixedWm(vec![WorkspaceEntry::new(3, false), WorkspaceEntry::new(1, true)]);
        let ws = wm.workspaces().unwrap();
        assert_eq!(ws[0].id, 3);
        assert!(ws[1].focused);
    }

    //  Mock NotificationSink

    #[derive(Default)]
    struct RecordingSink {
        sent: RefCell<Vec<Notification>>,
    }

    impl NotificationSink for RecordingSink {
        type Error = MockError;

        fn notify(&self, n: &Notification) -> Result<(), MockError> {
            self.sent.borrow_mut().push(n.clone());
            Ok(())
        }
    }

    #[test]
    fn mock_sink_records_notifications() {
        let sink = RecordingSink::default();
        let n = Notification {
            title: "t".into(),
            category: "c".into(),
            urgency: Urgency::Low,
            duration_ms: 10,
            body: "b".into(),
        };
        sink.notify(&n).unwrap();
        assert_eq!(sink.sent.borrow().as_slice(), &[n]);
    }
}
