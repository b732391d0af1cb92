//! Notification sinks.
//!
//! [`desktop`] delivers notifications to the freedesktop notification
//! service (dunst, mako, …) over D-Bus.  [`stdout`] prints the body
//! instead, for status bars that poll the tool.

pub mod desktop;
pub mod stdout;
