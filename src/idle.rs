//! Idle/lock configuration.
//!
//! swayws does not watch for inactivity itself.  It maps inactivity
//! thresholds to actions and renders them as an argument list for the
//! external `swayidle` service:
//!
//! ```json
//! { "600": "display-off", "3600": "lock-screen" }
//! ```
//!
//! becomes
//!
//! ```text
//! swayidle -w timeout 600 'swaymsg "output * power off"' resume 'swaymsg "output * power on"' timeout 3600 'swaylock -f'
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What to do once the user has been idle long enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdleAction {
    /// Power off all outputs; power them back on when activity resumes.
    DisplayOff,
    /// Lock the session.
    LockScreen,
}

impl IdleAction {
    /// Command run when the timeout fires.
    pub fn command(self) -> &'static str {
        match self {
            IdleAction::DisplayOff => r#"swaymsg "output * power off""#,
            IdleAction::LockScreen => "swaylock -f",
        }
    }

    /// Command run when activity resumes, if any.
    pub fn resume(self) -> Option<&'static str> {
        match self {
            IdleAction::DisplayOff => Some(r#"swaymsg "output * power on""#),
            IdleAction::LockScreen => None,
        }
    }
}

/// Errors from an invalid idle configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdleError {
    #[error("idle timeout for {0:?} must be greater than zero")]
    ZeroTimeout(IdleAction),
}

/// Inactivity seconds → action.  Keys are unique and kept in ascending
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdleConfig {
    rules: BTreeMap<u64, IdleAction>,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            rules: BTreeMap::from([(600, IdleAction::DisplayOff), (3600, IdleAction::LockScreen)]),
        }
    }
}

impl IdleConfig {
    /// Rules in ascending timeout order.
    pub fn rules(&self) -> impl Iterator<Item = (u64, IdleAction)> + '_ {
        self.rules.iter().map(|(&secs, &action)| (secs, action))
    }

    /// Build the `swayidle` argument list (without the program name).
    pub fn swayidle_args(&self) -> Result<Vec<String>, IdleError> {
        let mut args = vec!["-w".to_string()];
        for (secs, action) in self.rules() {
            if secs == 0 {
                return Err(IdleError::ZeroTimeout(action));
            }
            args.push("timeout".into());
            args.push(secs.to_string());
            args.push(action.command().into());
            if let Some(resume) = action.resume() {
                args.push("resume".into());
                args.push(resume.into());
            }
        }
        Ok(args)
    }

    /// A single shell line invoking `swayidle`, suitable for an `exec` in
    /// the sway config.
    pub fn shell_line(&self) -> Result<String, IdleError> {
        let mut line = String::from("swayidle");
        for arg in self.swayidle_args()? {
            line.push(' ');
            if arg.contains(' ') {
                line.push('\'');
                line.push_str(&arg);
                line.push('\'');
            } else {
                line.push_str(&arg);
            }
        }
        Ok(line)
    }
}
