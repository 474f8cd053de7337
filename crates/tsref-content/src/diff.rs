//! Drift diffs for logging
//!
//! The engine decides drift by exact text comparison; this module only
//! produces the human-readable unified diff logged alongside a drift report.

use similar::TextDiff;

/// Render a unified diff between the on-disk text and the expected text.
pub fn unified_diff(current: &str, expected: &str, label: &str) -> String {
    TextDiff::from_lines(current, expected)
        .unified_diff()
        .context_radius(3)
        .header(&format!("{label} (on disk)"), &format!("{label} (expected)"))
        .to_string()
}
