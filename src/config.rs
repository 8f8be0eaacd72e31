//! Configuration for a font-to-module conversion.
//!
//! A conversion is fully described by three values: where the base64 payload
//! lives, where the generated module goes, and which constant name it
//! exports. [`ConversionConfig::default()`] reproduces the fixed layout of the
//! web-app build (`android/font_b64.txt` → `src/utils/arabicFont.js`).

use crate::error::Font2JsError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the base64 font payload.
pub const DEFAULT_INPUT_PATH: &str = "android/font_b64.txt";

/// Default location of the generated JavaScript module.
pub const DEFAULT_OUTPUT_PATH: &str = "src/utils/arabicFont.js";

/// Default exported constant name.
pub const DEFAULT_CONSTANT_NAME: &str = "ARABIC_FONT_BASE64";

static RE_JS_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Configuration for a single conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use font2js::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .input_path("assets/font_b64.txt")
///     .output_path("web/font.js")
///     .constant_name("FONT_BASE64")
///     .build()
///     .unwrap();
/// assert_eq!(config.constant_name, "FONT_BASE64");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Text file holding the base64 payload. Default: `android/font_b64.txt`.
    pub input_path: PathBuf,

    /// Module file to create or replace. Default: `src/utils/arabicFont.js`.
    ///
    /// Its parent directory must already exist.
    pub output_path: PathBuf,

    /// Name of the exported constant. Default: `ARABIC_FONT_BASE64`.
    pub constant_name: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            constant_name: DEFAULT_CONSTANT_NAME.to_string(),
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Config for `input` → `output` with the default constant name.
    pub fn for_paths(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input_path: input.as_ref().to_path_buf(),
            output_path: output.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Check the invariants enforced by [`ConversionConfigBuilder::build`].
    pub fn validate(&self) -> Result<(), Font2JsError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Font2JsError::InvalidConfig(
                "input path must not be empty".into(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(Font2JsError::InvalidConfig(
                "output path must not be empty".into(),
            ));
        }
        if !is_js_identifier(&self.constant_name) {
            return Err(Font2JsError::InvalidConfig(format!(
                "constant name '{}' is not a valid JavaScript identifier",
                self.constant_name
            )));
        }
        Ok(())
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn constant_name(mut self, name: impl Into<String>) -> Self {
        self.config.constant_name = name.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Font2JsError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Whether `name` can be used as an `export const` binding.
///
/// Reserved words are not rejected.
pub fn is_js_identifier(name: &str) -> bool {
    RE_JS_IDENTIFIER.is_match(name)
}
