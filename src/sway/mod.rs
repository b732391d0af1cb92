//! sway-specific implementations.
//!
//! This module provides the concrete backend for the
//! [`WindowManager`](crate::traits::WindowManager) trait, speaking sway's
//! i3-compatible IPC protocol over the socket named by `$SWAYSOCK`.
//!
//! Nothing outside this module should reference sway directly.

pub mod ipc;
pub mod wm;
