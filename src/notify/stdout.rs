//! [`NotificationSink`] that writes the body to standard output.

use crate::notification::Notification;
use crate::traits::NotificationSink;
use std::io::Write;

/// Prints each notification body on its own line.  Title, category and
/// timing are dropped.
pub struct StdoutSink;

impl NotificationSink for StdoutSink {
    type Error = std::io::Error;

    fn notify(&self, notification: &Notification) -> Result<(), Self::Error> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", notification.body)?;
        out.flush()
    }
}
