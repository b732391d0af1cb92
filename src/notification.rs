//! The message handed to a [`NotificationSink`](crate::traits::NotificationSink).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency level understood by freedesktop notification servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Low => write!(f, "low"),
            Urgency::Normal => write!(f, "normal"),
            Urgency::Critical => write!(f, "critical"),
        }
    }
}

/// A single transient on-screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Summary line shown in bold by most servers.
    pub title: String,
    /// Category tag, also used as the stack tag so a new popup replaces
    /// the previous one.
    pub category: String,
    pub urgency: Urgency,
    /// How long the popup stays visible.
    pub duration_ms: u32,
    pub body: String,
}
