//! Deterministic JSON rendering
//!
//! Rendering happens in two passes: serde_json's 2-space pretty printer
//! first, then a reformat of that text according to the resolved style.
//! Identical value + identical style must produce byte-identical output;
//! the sync engine's exact-text comparison is meaningless otherwise.

use serde_json::Value;

use tsref_fs::NormalizedPath;

use crate::style::{JsonStyle, resolve_style};
use crate::{Error, Result};

/// Render a JSON value to the canonical text for `reference_path`.
///
/// The style is resolved starting from the directory containing
/// `reference_path`.
///
/// # Errors
///
/// Returns an error if style resolution or serialization fails.
pub fn render(value: &Value, reference_path: &NormalizedPath) -> Result<String> {
    let dir = reference_path
        .parent()
        .unwrap_or_else(|| NormalizedPath::new("."));
    let style = resolve_style(&dir)?;
    render_with_style(value, &style)
}

/// Render a JSON value using an already-resolved style.
pub fn render_with_style(value: &Value, style: &JsonStyle) -> Result<String> {
    let pretty = serde_json::to_string_pretty(value).map_err(|e| Error::Render {
        message: e.to_string(),
    })?;

    let terminator = style.end_of_line.as_str();
    let mut out = String::with_capacity(pretty.len() + 1);

    for line in pretty.lines() {
        let content = line.trim_start_matches(' ');
        // serde_json's pretty printer indents two spaces per level
        let depth = (line.len() - content.len()) / 2;
        if style.use_tabs {
            out.extend(std::iter::repeat_n('\t', depth));
        } else {
            out.extend(std::iter::repeat_n(' ', depth * style.tab_width));
        }
        out.push_str(content);
        out.push_str(terminator);
    }

    Ok(out)
}
