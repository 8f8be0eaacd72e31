//! Result types returned by the conversion entry points.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The generated module together with the stats of producing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Full text of the generated module, trailing newline included.
    pub module: String,
    /// The normalised payload embedded in `module`.
    pub payload: String,
    pub stats: ConversionStats,
}

/// What a conversion read, produced and wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub constant_name: String,
    /// Size of the payload file as read, in bytes.
    pub input_bytes: u64,
    /// Length of the normalised payload, in bytes.
    pub payload_len: u64,
    /// Number of `\n` and `\r` characters stripped from the payload.
    pub line_breaks_removed: u64,
    /// Size of the generated module, in bytes. Zero until it is written.
    pub output_bytes: u64,
    /// Wall-clock time of the whole conversion.
    pub duration_ms: u64,
}
