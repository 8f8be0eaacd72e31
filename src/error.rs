//! Error types for the font2js library.
//!
//! Every failure is fatal to the run: there is no retry and no partial
//! success. Variants are grouped by which side of the pipeline failed so the
//! message alone tells the user whether the source read or the destination
//! write went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the font2js library.
#[derive(Debug, Error)]
pub enum Font2JsError {
    // ── Source-read errors ────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Font payload not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the input file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The input file was read but is not valid UTF-8 text.
    #[error("Font payload '{path}' is not valid UTF-8 text")]
    InvalidEncoding { path: PathBuf },

    /// Any other I/O failure while reading the input file.
    #[error("Failed to read font payload '{path}': {source}")]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Destination-write errors ──────────────────────────────────────────
    /// The directory that should contain the output file does not exist.
    #[error("Output directory does not exist: '{path}'")]
    OutputDirMissing { path: PathBuf },

    /// Could not create, write or rename the output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Font2JsError {
    /// `true` when the failure happened while reading the source payload.
    pub fn is_read_error(&self) -> bool {
        matches!(
            self,
            Font2JsError::FileNotFound { .. }
                | Font2JsError::PermissionDenied { .. }
                | Font2JsError::InvalidEncoding { .. }
                | Font2JsError::InputReadFailed { .. }
        )
    }

    /// `true` when the failure happened while writing the generated module.
    pub fn is_write_error(&self) -> bool {
        matches!(
            self,
            Font2JsError::OutputDirMissing { .. } | Font2JsError::OutputWriteFailed { .. }
        )
    }
}
