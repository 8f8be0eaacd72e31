//! Pipeline stages for payload-to-module conversion.
//!
//! Each submodule implements exactly one step, so each can be tested on its
//! own without touching the file system more than it needs to.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ normalize ──▶ render ──▶ write
//! (read)    (strip)       (template)  (temp + rename)
//! ```
//!
//! 1. [`input`]     — read the payload file and classify I/O failures
//! 2. [`normalize`] — drop `\n`/`\r` and trim surrounding whitespace
//! 3. [`render`]    — wrap the payload in `export const NAME = "...";`
//! 4. [`write`]     — replace the destination atomically

pub mod input;
pub mod normalize;
pub mod render;
pub mod write;
