//! Input stage: read the payload file into memory.
//!
//! The payload is read whole. Font payloads are a few hundred kilobytes at
//! most and the next stage needs the complete string to trim it.

use crate::error::Font2JsError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read the payload file at `path` as UTF-8 text.
///
/// I/O failures are mapped onto the read side of [`Font2JsError`] so the
/// caller can tell a missing file from a permissions problem or a binary
/// (non-UTF-8) file.
pub fn read_payload(path: &Path) -> Result<String, Font2JsError> {
    let text = std::fs::read_to_string(path).map_err(|e| classify_read_error(path, e))?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

fn classify_read_error(path: &Path, e: std::io::Error) -> Font2JsError {
    let path = path.to_path_buf();
    match e.kind() {
        ErrorKind::NotFound => Font2JsError::FileNotFound { path },
        ErrorKind::PermissionDenied => Font2JsError::PermissionDenied { path },
        ErrorKind::InvalidData => Font2JsError::InvalidEncoding { path },
        _ => Font2JsError::InputReadFailed { path, source: e },
    }
}
