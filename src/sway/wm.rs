//! [`WindowManager`] implementation backed by sway IPC.
//!
//! Communicates directly with sway through the Unix socket at `$SWAYSOCK`,
//! without spawning `swaymsg`.

use super::ipc::{self, MessageType, SwayIpcError};
use crate::traits::WindowManager;
use crate::workspace::WorkspaceEntry;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// sway-backed window manager.
///
/// Each query opens a short-lived connection to the IPC socket.
pub struct SwayWm {
    socket: PathBuf,
}

impl SwayWm {
    /// Resolve the socket from `$SWAYSOCK` and check that it exists.
    ///
    /// This is the startup capability check for the query side: failing
    /// here means no workspace query can succeed.
    pub fn connect() -> Result<Self, SwayIpcError> {
        let path = std::env::var("SWAYSOCK")
            .map_err(|_| SwayIpcError::NoSocket("SWAYSOCK not set".into()))?;
        Self::with_socket(path)
    }

    /// Use an explicit socket path.
    pub fn with_socket(path: impl AsRef<Path>) -> Result<Self, SwayIpcError> {
        let socket = path.as_ref().to_path_buf();
        if !socket.exists() {
            return Err(SwayIpcError::NoSocket(format!(
                "{} does not exist",
                socket.display()
            )));
        }
        Ok(Self { socket })
    }

    /// The filesystem path of the IPC socket.
    pub fn socket(&self) -> &Path {
        &self.socket
    }
}

//  Minimal serde struct for the JSON we care about

/// Subset of the JSON object returned by `GET_WORKSPACES`.
#[derive(Deserialize)]
struct WorkspaceJson {
    num: i32,
    name: String,
    focused: bool,
}

/// Parse a `GET_WORKSPACES` reply.
///
/// Workspaces whose name does not start with a number report `num: -1`;
/// they have no numeric id and are skipped.
fn parse_workspaces(json: &str) -> Result<Vec<WorkspaceEntry>, SwayIpcError> {
    let raw: Vec<WorkspaceJson> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .filter_map(|w| {
            if w.num < 0 {
                debug!("skipping unnumbered workspace {:?}", w.name);
                None
            } else {
                Some(WorkspaceEntry::new(w.num, w.focused))
            }
        })
        .collect())
}

impl WindowManager for SwayWm {
    type Error = SwayIpcError;

    fn workspaces(&self) -> Result<Vec<WorkspaceEntry>, Self::Error> {
        let json = ipc::request(&self.socket, MessageType::GetWorkspaces, b"")?;
        parse_workspaces(&json)
    }
}
