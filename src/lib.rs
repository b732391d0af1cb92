//! **swayws** — a one-shot workspace status notifier for sway.
//!
//! Each invocation reads the current workspace list, renders it as a single
//! line such as `1 [2] 3` (the focused workspace in brackets), and shows it
//! as a desktop notification.  It is meant to be bound to the same keys
//! that switch workspaces.
//!
//! # Architecture
//!
//! The crate is organised around two core traits:
//!
//! * [`traits::WindowManager`] — abstracts the workspace query so the
//!   formatting logic is not coupled to any specific compositor.
//! * [`traits::NotificationSink`] — abstracts where the line ends up (a
//!   notification server, stdout, a test recorder).
//!
//! Concrete implementations live in [`sway`] (sway IPC) and [`notify`].
//! [`reporter::WorkspaceStatusReporter`] ties them together.

pub mod config;
pub mod idle;
pub mod notification;
pub mod notify;
pub mod reporter;
pub mod sway;
pub mod traits;
pub mod workspace;
