// ABOUTME: Text utility functions for display-field shaping.
// ABOUTME: Provides word-boundary truncation with an ellipsis marker.

/// Truncates `text` to at most `max` visible characters.
///
/// Returns the text unchanged when it already fits. Otherwise takes the first
/// `max - 1` characters, drops trailing whitespace, cuts at the last interior
/// space when one exists, and appends a single ellipsis character. Counts
/// chars, so multi-byte characters are never split.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max.saturating_sub(1)).collect();
    let head = head.trim_end();
    match head.rfind(' ') {
        Some(idx) if idx > 0 => format!("{}…", &head[..idx]),
        _ => format!("{}…", head),
    }
}
