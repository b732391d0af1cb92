//! Framing for sway's IPC protocol.
//!
//! # Wire format
//!
//! Every message, in either direction, is a fixed 14-byte header followed
//! by a payload:
//!
//! ```text
//! "i3-ipc" | payload length (u32, native endian) | type (u32, native endian) | payload
//! ```
//!
//! Replies carry the same type as the request they answer.

use log::debug;
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::Path;

/// Magic string that opens every message.
pub const MAGIC: &[u8; 6] = b"i3-ipc";

/// Magic + length + type.
pub const HEADER_LEN: usize = 14;

/// The IPC message types swayws sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// `GET_WORKSPACES`: reply is a JSON array of workspace objects.
    GetWorkspaces,
}

impl MessageType {
    pub fn code(self) -> u32 {
        match self {
            MessageType::GetWorkspaces => 1,
        }
    }
}

/// Errors produced while talking to the sway IPC socket.
#[derive(Debug, thiserror::Error)]
pub enum SwayIpcError {
    #[error("sway socket unavailable: {0}")]
    NoSocket(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("reply does not start with i3-ipc magic")]
    BadMagic,
    #[error("reply type {got} does not match request type {expected}")]
    UnexpectedType { expected: u32, got: u32 },
    #[error("reply is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a request frame.
pub fn encode(ty: MessageType, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(MAGIC);
    frame.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
    frame.extend_from_slice(&ty.code().to_ne_bytes());
    frame.extend_from_slice(payload);
    frame
}

/// Read one reply frame from `reader` and return its payload.
///
/// Fails if the header is malformed, the type differs from `expected`, or
/// the stream ends before the announced payload length.
pub fn read_reply<R: Read>(reader: &mut R, expected: MessageType) -> Result<Vec<u8>, SwayIpcError> {
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header)?;
    if &header[..6] != MAGIC {
        return Err(SwayIpcError::BadMagic);
    }
    let len = u32::from_ne_bytes([header[6], header[7], header[8], header[9]]) as usize;
    let got = u32::from_ne_bytes([header[10], header[11], header[12], header[13]]);
    if got != expected.code() {
        return Err(SwayIpcError::UnexpectedType {
            expected: expected.code(),
            got,
        });
    }
    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;
    Ok(payload)
}

/// Send one request over a fresh connection to `socket` and return the
/// reply payload as a string.
pub fn request(socket: &Path, ty: MessageType, payload: &[u8]) -> Result<String, SwayIpcError> {
    let mut stream = UnixStream::connect(socket)?;
    stream.write_all(&encode(ty, payload))?;
    let reply = read_reply(&mut stream, ty)?;
    debug!("{:?}: {} byte reply", ty, reply.len());
    Ok(String::from_utf8(reply)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reply_frame(code: u32, payload: &[u8]) -> Vec<u8> {
        let mut frame = MAGIC.to_vec();
        frame.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
        frame.extend_from_slice(&code.to_ne_bytes());
        frame.extend_from_slice(payload);
        frame
    }

    #[test]
    fn request_header_layout() {
        let frame = encode(MessageType::GetWorkspaces, b"");
        assert_eq!(frame.len(), HEADER_LEN);
        assert_eq!(&frame[..6], b"i3-ipc");
        assert_eq!(&frame[6..10], &0u32.to_ne_bytes());
        assert_eq!(&frame[10..14], &1u32.to_ne_bytes());
    }

    #[test]
    fn payload_follows_header() {
        let frame = encode(MessageType::GetWorkspaces, b"xyz");
        assert_eq!(&frame[6..10], &3u32.to_ne_bytes());
        assert_eq!(&frame[HEADER_LEN..], b"xyz");
    }

    #[test]
    fn reads_matching_reply() {
        let mut r = Cursor::new(reply_frame(1, b"[]"));
        let payload = read_reply(&mut r, MessageType::GetWorkspaces).unwrap();
        assert_eq!(payload, b"[]");
    }

    #[test]
    fn rejects_bad_magic() {
        let mut frame = reply_frame(1, b"[]");
        frame[0] = b'x';
        let err = read_reply(&mut Cursor::new(frame), MessageType::GetWorkspaces).unwrap_err();
        assert!(matches!(err, SwayIpcError::BadMagic));
    }

    #[test]
    fn rejects_type_mismatch() {
        let frame = reply_frame(3, b"[]");
        let err = read_reply(&mut Cursor::new(frame), MessageType::GetWorkspaces).unwrap_err();
        assert!(matches!(
            err,
            SwayIpcError::UnexpectedType {
                expected: 1,
                got: 3
            }
        ));
    }

    #[test]
    fn rejects_truncated_payload() {
        let mut frame = reply_frame(1, b"[1,2,3]");
        frame.truncate(frame.len() - 2);
        let err = read_reply(&mut Cursor::new(frame), MessageType::GetWorkspaces).unwrap_err();
        assert!(matches!(err, SwayIpcError::Io(_)));
    }

    #[test]
    fn rejects_truncated_header() {
        let err = read_reply(&mut Cursor::new(b"i3-ip".to_vec()), MessageType::GetWorkspaces)
            .unwrap_err();
        assert!(matches!(err, SwayIpcError::Io(_)));
    }
}
