//! # font2js
//!
//! Embed a base64-encoded font payload in a JavaScript module.
//!
//! A web app that renders Arabic text into generated documents needs the font
//! bytes at runtime. The Android side ships them as a base64 dump wrapped over
//! many lines; this crate turns that dump into a one-line ES module the web
//! build can import.
//!
//! ## Pipeline Overview
//!
//! ```text
//! font_b64.txt
//!  │
//!  ├─ 1. Input      read the whole file as UTF-8
//!  ├─ 2. Normalise  drop every \n and \r, trim surrounding whitespace
//!  ├─ 3. Render     export const ARABIC_FONT_BASE64 = "…";
//!  └─ 4. Write      temp file + rename over the destination
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use font2js::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder()
//!         .input_path("android/font_b64.txt")
//!         .output_path("src/utils/arabicFont.js")
//!         .build()?;
//!     let stats = convert(&config)?;
//!     eprintln!("wrote {} bytes", stats.output_bytes);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `font2js` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert, convert_files, generate};
pub use error::Font2JsError;
pub use output::{ConversionOutput, ConversionStats};
pub use pipeline::normalize::{normalize_payload, NormalizedPayload};
pub use pipeline::render::{parse_module, render_module, ParsedModule};
