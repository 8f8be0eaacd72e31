//! Conversion entry points.
//!
//! [`generate`] runs read → normalise → render and returns the module text.
//! [`convert`] does the same and then replaces the destination file.
//! [`convert_files`] is the two-path shorthand using the default constant
//! name.

use crate::config::ConversionConfig;
use crate::error::Font2JsError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::{input, normalize, render, write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Read the payload named by `config` and render the module, without writing.
///
/// # Errors
/// Returns `Err(Font2JsError)` if the config is invalid or the payload file
/// cannot be read as UTF-8 text.
pub fn generate(config: &ConversionConfig) -> Result<ConversionOutput, Font2JsError> {
    let start = Instant::now();
    config.validate()?;

    let raw = input::read_payload(&config.input_path)?;
    let normalized = normalize::normalize_payload(&raw);
    debug!(
        "Normalised payload: {} → {} bytes, {} line breaks removed",
        raw.len(),
        normalized.payload.len(),
        normalized.line_breaks_removed
    );

    let module = render::render_module(&config.constant_name, &normalized.payload);

    let stats = ConversionStats {
        input_path: config.input_path.clone(),
        output_path: config.output_path.clone(),
        constant_name: config.constant_name.clone(),
        input_bytes: raw.len() as u64,
        payload_len: normalized.payload.len() as u64,
        line_breaks_removed: normalized.line_breaks_removed as u64,
        output_bytes: 0,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    Ok(ConversionOutput {
        module,
        payload: normalized.payload,
        stats,
    })
}

/// Convert the payload file to a module and write it to `config.output_path`.
///
/// The destination is replaced atomically. If the payload cannot be read the
/// destination is left untouched.
///
/// # Errors
/// - [`Font2JsError::FileNotFound`] / [`Font2JsError::PermissionDenied`] /
///   [`Font2JsError::InvalidEncoding`] / [`Font2JsError::InputReadFailed`]
///   when the source cannot be read
/// - [`Font2JsError::OutputDirMissing`] / [`Font2JsError::OutputWriteFailed`]
///   when the destination cannot be written
pub fn convert(config: &ConversionConfig) -> Result<ConversionStats, Font2JsError> {
    let start = Instant::now();
    info!(
        "Converting {} → {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let output = generate(config)?;
    let written = write::write_atomic(&config.output_path, &output.module)?;

    let stats = ConversionStats {
        output_bytes: written,
        duration_ms: start.elapsed().as_millis() as u64,
        ..output.stats
    };

    info!(
        "Wrote {} ({} bytes, payload {} bytes) in {}ms",
        config.output_path.display(),
        stats.output_bytes,
        stats.payload_len,
        stats.duration_ms
    );
    Ok(stats)
}

/// Convert `input` to `output`, exporting the default constant name.
pub fn convert_files(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ConversionStats, Font2JsError> {
    convert(&ConversionConfig::for_paths(input, output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generate_does_not_write() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("font_b64.txt");
        let output = dir.path().join("font.js");
        std::fs::write(&input, "QUJD\nREVG\r\n").unwrap();

        let out = generate(&ConversionConfig::for_paths(&input, &output)).unwrap();
        assert_eq!(out.module, "export const ARABIC_FONT_BASE64 = \"QUJDREVG\";\n");
        assert_eq!(out.payload, "QUJDREVG");
        assert_eq!(out.stats.input_bytes, 11);
        assert_eq!(out.stats.line_breaks_removed, 3);
        assert_eq!(out.stats.output_bytes, 0);
        assert!(!output.exists());
    }

    #[test]
    fn convert_reports_written_bytes() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("font_b64.txt");
        let output = dir.path().join("font.js");
        std::fs::write(&input, "XYZ").unwrap();

        let stats = convert_files(&input, &output).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(stats.output_bytes, written.len() as u64);
        assert_eq!(stats.payload_len, 3);
        assert_eq!(stats.constant_name, "ARABIC_FONT_BASE64");
    }

    #[test]
    fn invalid_config_fails_before_reading() {
        let config = ConversionConfig {
            constant_name: "not valid".into(),
            ..ConversionConfig::for_paths("/definitely/missing.txt", "out.js")
        };
        let err = convert(&config).unwrap_err();
        assert!(matches!(err, Font2JsError::InvalidConfig(_)), "got: {err:?}");
    }
}
