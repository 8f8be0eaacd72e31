//! Normalisation: turn raw file contents into a single-line payload.
//!
//! Base64 dumps are usually wrapped at 64 or 76 columns and may carry CRLF
//! line endings when produced on Windows. Both line-break characters are
//! removed wherever they occur, then surrounding whitespace is trimmed. Other
//! characters, including interior spaces, pass through untouched: the payload
//! is not validated as base64.

/// Result of normalising a raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPayload {
    /// The payload with line breaks removed and surrounding whitespace trimmed.
    pub payload: String,
    /// How many `\n` and `\r` characters were removed.
    pub line_breaks_removed: usize,
}

/// Remove every `\n` and `\r`, then trim leading and trailing whitespace.
pub fn normalize_payload(raw: &str) -> NormalizedPayload {
    let mut joined = String::with_capacity(raw.len());
    let mut line_breaks_removed = 0;
    for c in raw.chars() {
        if c == '\n' || c == '\r' {
            line_breaks_removed += 1;
        } else {
            joined.push(c);
        }
    }

    NormalizedPayload {
        payload: joined.trim().to_string(),
        line_breaks_removed,
    }
}
