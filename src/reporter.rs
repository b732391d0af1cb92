//! The one-shot workspace status report.
//!
//! [`WorkspaceStatusReporter`] queries a [`WindowManager`], formats the
//! workspace list with [`format_status`], and hands the line to a
//! [`NotificationSink`].  Nothing is retried: the tool is meant to be
//! re-run by a keybinding on every trigger.

use crate::config::NotificationConfig;
use crate::notification::Notification;
use crate::traits::{NotificationSink, WindowManager};
use crate::workspace::{format_status, WorkspaceSnapshot};
use log::{debug, warn};

/// Errors that abort a report.
#[derive(Debug, thiserror::Error)]
pub enum ReporterError {
    /// The workspace query failed or returned data that is not a valid
    /// snapshot.
    #[error("workspace query unavailable: {0}")]
    QueryUnavailable(String),
    /// The notification sink could not be reached.
    #[error("notification sink unavailable: {0}")]
    NotifyUnavailable(String),
}

impl ReporterError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReporterError::QueryUnavailable(_) => 2,
            ReporterError::NotifyUnavailable(_) => 3,
        }
    }
}

/// Queries workspaces and reports them as one notification.
///
/// Generic over the window manager and the sink so either side can be
/// replaced in tests.
///
/// ```ignore
/// let reporter = WorkspaceStatusReporter::new(SwayWm::connect()?, DesktopNotifier::probe()?);
/// reporter.report()?;
/// ```
pub struct WorkspaceStatusReporter<W: WindowManager, N: NotificationSink> {
    wm: W,
    sink: N,
    style: NotificationConfig,
}

impl<W: WindowManager, N: NotificationSink> WorkspaceStatusReporter<W, N> {
    /// Create a reporter with the default notification style
    /// (`"Workspaces"`, normal urgency, 3000 ms).
    pub fn new(wm: W, sink: N) -> Self {
        Self {
            wm,
            sink,
            style: NotificationConfig::default(),
        }
    }

    /// Override title, category, urgency and duration.
    pub fn set_style(&mut self, style: NotificationConfig) {
        self.style = style;
    }

    /// Query and validate the current workspaces.
    pub fn snapshot(&self) -> Result<WorkspaceSnapshot, ReporterError> {
        let entries = self
            .wm
            .workspaces()
            .map_err(|e| ReporterError::QueryUnavailable(e.to_string()))?;
        WorkspaceSnapshot::new(entries).map_err(|e| ReporterError::QueryUnavailable(e.to_string()))
    }

    /// Query the window manager and return the formatted status line
    /// without notifying.
    pub fn render(&self) -> Result<String, ReporterError> {
        let snapshot = self.snapshot()?;
        let focus = snapshot.focus();
        if focus.is_ambiguous() && !snapshot.is_empty() {
            warn!("ambiguous focus: {}", focus);
        }
        let line = format_status(&snapshot);
        debug!("status line: {:?}", line);
        Ok(line)
    }

    /// Build the notification for `body` using the configured style.
    pub fn notification(&self, body: String) -> Notification {
        Notification {
            title: self.style.title.clone(),
            category: self.style.category.clone(),
            urgency: self.style.urgency,
            duration_ms: self.style.timeout_ms,
            body,
        }
    }

    /// Query, format, and deliver one notification.
    pub fn report(&self) -> Result<(), ReporterError> {
        let line = self.render()?;
        self.sink
            .notify(&self.notification(line))
            .map_err(|e| ReporterError::NotifyUnavailable(e.to_string()))
    }
}
