//! Line classification.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keywords that open a structural marker line. Case-sensitive, must start the line.
pub const MARKER_KEYWORDS: [&str; 4] = ["Issue", "Brief", "Press Byte", "Actionable"];

/// Glyphs that open a bulleted list item.
pub const BULLET_GLYPHS: [char; 5] = ['*', '-', '•', '●', '■'];

static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after trimming
    Blank,
    /// Starts with a marker keyword
    Marker,
    /// Bullet or "N." numbered entry
    ListItem,
    /// Anything else; candidate paragraph content
    Prose,
}

/// Classify a line that has already been trimmed at both ends.
pub fn classify(line: &str) -> LineKind {
    if line.is_empty() {
        LineKind::Blank
    } else if is_marker(line) {
        LineKind::Marker
    } else if is_list_item(line) {
        LineKind::ListItem
    } else {
        LineKind::Prose
    }
}

/// Check if a line opens with one of [`MARKER_KEYWORDS`].
pub fn is_marker(line: &str) -> bool {
    MARKER_KEYWORDS.iter().any(|kw| line.starts_with(kw))
}

/// Check if a line opens with a bullet glyph or "digits followed by a period".
pub fn is_list_item(line: &str) -> bool {
    line.starts_with(BULLET_GLYPHS) || NUMBERED_ITEM.is_match(line)
}
