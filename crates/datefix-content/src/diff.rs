//! Unified diff rendering for rewrite previews

use similar::TextDiff;

/// Render a unified diff between the original and rewritten buffers.
///
/// Returns an empty string when the buffers are identical.
pub fn unified_diff(old: &str, new: &str, old_label: &str, new_label: &str) -> String {
    if old == new {
        return String::new();
    }
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(old_label, new_label)
        .to_string()
}

/// Line-based similarity ratio between two buffers (1.0 = identical).
pub fn similarity(old: &str, new: &str) -> f64 {
    if old == new {
        return 1.0;
    }
    TextDiff::from_lines(old, new).ratio() as f64
}
