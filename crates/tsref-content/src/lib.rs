//! Canonical JSON rendering and drift diffing for tsref
//!
//! The sync engine decides whether a tsconfig is in sync by exact text
//! comparison, which makes the renderer in this crate the de facto on-disk
//! standard: whatever it emits for a given value and resolved style is what
//! every synced file must contain, byte for byte.

pub mod diff;
pub mod error;
pub mod render;
pub mod style;

pub use diff::unified_diff;
pub use error::{Error, Result};
pub use render::{render, render_with_style};
pub use style::{EndOfLine, JsonStyle, resolve_style};
