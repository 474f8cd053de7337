//! Formatting style resolution
//!
//! The canonical text for a tsconfig follows the formatting style configured
//! nearest to it: resolution starts in the file's directory and walks up,
//! taking the first `.prettierrc`-family file found. With no style file
//! anywhere the defaults apply (2 spaces, LF).

use serde::Deserialize;

use tsref_fs::NormalizedPath;

use crate::{Error, Result};

/// Style filenames probed in each directory, in priority order.
const STYLE_FILENAMES: &[&str] = &[
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.yaml",
    ".prettierrc.yml",
];

/// Line ending to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
}

impl EndOfLine {
    /// The literal line terminator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Resolved JSON formatting style.
///
/// Only the fields that affect JSON output are recognized; everything else
/// in a style file is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonStyle {
    /// Spaces per indent level
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
    /// Indent with tabs instead of spaces
    #[serde(default)]
    pub use_tabs: bool,
    /// Line terminator
    #[serde(default)]
    pub end_of_line: EndOfLine,
}

fn default_tab_width() -> usize {
    2
}

impl Default for JsonStyle {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            use_tabs: false,
            end_of_line: EndOfLine::default(),
        }
    }
}

/// Resolve the style to apply to a file in `start_dir`.
///
/// Walks from `start_dir` toward the filesystem root and loads the first
/// style file found. Identical inputs always resolve to an identical style,
/// which the exact-text sync comparison depends on.
///
/// # Errors
///
/// Returns an error if a style file exists but cannot be read or parsed.
pub fn resolve_style(start_dir: &NormalizedPath) -> Result<JsonStyle> {
    let mut dir = Some(start_dir.clone());
    while let Some(current) = dir {
        for name in STYLE_FILENAMES {
            let candidate = current.join(*name);
            if candidate.is_file() {
                tracing::debug!(path = %candidate, "resolved style file");
                return load_style(&candidate);
            }
        }
        dir = current.parent();
    }

    Ok(JsonStyle::default())
}

/// Load a single style file, dispatching on its extension.
///
/// A bare `.prettierrc` may hold either JSON or YAML; JSON is tried first.
fn load_style(path: &NormalizedPath) -> Result<JsonStyle> {
    let content = tsref_fs::io::read_text(path)?;

    match path.extension() {
        Some("json") => serde_json::from_str(&content).map_err(|e| Error::StyleParse {
            path: path.to_native(),
            message: e.to_string(),
        }),
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| Error::StyleParse {
                path: path.to_native(),
                message: e.to_string(),
            })
        }
        _ => serde_json::from_str(&content)
            .or_else(|_| serde_yaml::from_str(&content))
            .map_err(|e: serde_yaml::Error| Error::StyleParse {
                path: path.to_native(),
                message: e.to_string(),
            }),
    }
}
