//! Module rendering: wrap a payload in an ES module export.
//!
//! The generated file holds exactly one statement and one trailing newline,
//! so bundlers and diff tools see a stable, single-line artifact.

/// Render `export const {name} = "{payload}";\n`.
///
/// The payload is inserted verbatim. Base64 never contains `"` or `\`, and
/// the payload is not otherwise checked.
pub fn render_module(constant_name: &str, payload: &str) -> String {
    let mut out = String::with_capacity(constant_name.len() + payload.len() + 24);
    out.push_str("export const ");
    out.push_str(constant_name);
    out.push_str(" = \"");
    out.push_str(payload);
    out.push_str("\";\n");
    out
}

/// A module split back into its constant name and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedModule<'a> {
    pub constant_name: &'a str,
    pub payload: &'a str,
}

/// Inverse of [`render_module`].
///
/// Returns `None` when `source` is not a single `export const NAME = "...";`
/// statement (an optional trailing newline is accepted).
pub fn parse_module(source: &str) -> Option<ParsedModule<'_>> {
    let line = source.strip_suffix('\n').unwrap_or(source);
    let rest = line.strip_prefix("export const ")?;
    let (constant_name, rest) = rest.split_once(" = \"")?;
    let payload = rest.strip_suffix("\";")?;
    if constant_name.is_empty() || payload.contains('\n') {
        return None;
    }
    Some(ParsedModule {
        constant_name,
        payload,
    })
}
