//! CLI binary for font2js.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints the result.

use anyhow::{Context, Result};
use clap::Parser;
use font2js::config::{DEFAULT_CONSTANT_NAME, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use font2js::{convert, ConversionConfig, ConversionStats};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Regenerate the web-app module from the Android payload (default paths)
  font2js

  # Explicit paths
  font2js assets/font_b64.txt web/src/font.js

  # Different exported name
  font2js --name NOTO_NASKH_BASE64 naskh_b64.txt src/naskh.js

  # Machine-readable summary
  font2js --json > stats.json

OUTPUT:
  The destination holds exactly one statement:
    export const ARABIC_FONT_BASE64 = "<payload>";
  Every \n and \r in the payload file is removed and surrounding whitespace
  is trimmed. The payload is not validated as base64.

  The destination directory must exist. The file is replaced atomically.

ENVIRONMENT VARIABLES:
  FONT2JS_INPUT    Payload file (same as INPUT)
  FONT2JS_OUTPUT   Module file (same as OUTPUT)
  FONT2JS_NAME     Exported constant name (same as --name)
  RUST_LOG         tracing filter, overrides -v / -q
"#;

/// Embed a base64 font payload as an exported JavaScript constant.
#[derive(Parser, Debug)]
#[command(
    name = "font2js",
    version,
    about = "Embed a base64 font payload as an exported JavaScript constant",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Text file holding the base64 payload.
    #[arg(env = "FONT2JS_INPUT", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// JavaScript module to create or replace.
    #[arg(env = "FONT2JS_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Name of the exported constant.
    #[arg(short, long, env = "FONT2JS_NAME", default_value = DEFAULT_CONSTANT_NAME)]
    name: String,

    /// Print conversion stats as JSON on stdout.
    #[arg(long, env = "FONT2JS_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "FONT2JS_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "FONT2JS_QUIET", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = build_config(&cli)?;

    // ── Run conversion ───────────────────────────────────────────────────
    let stats = convert(&config).with_context(|| {
        format!(
            "Conversion failed: {} → {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    if cli.json {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialise stats")?;
        println!("{json}");
    }

    if !cli.quiet {
        print_summary(&stats);
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli) -> Result<ConversionConfig> {
    ConversionConfig::builder()
        .input_path(cli.input.clone())
        .output_path(cli.output.clone())
        .constant_name(cli.name.clone())
        .build()
        .context("Invalid configuration")
}

fn print_summary(stats: &ConversionStats) {
    eprintln!(
        "{}  {}  →  {}  {}",
        green("✔"),
        stats.input_path.display(),
        bold(&stats.output_path.display().to_string()),
        dim(&format!(
            "{} bytes, payload {} bytes, {}ms",
            stats.output_bytes, stats.payload_len, stats.duration_ms
        )),
    );
}
