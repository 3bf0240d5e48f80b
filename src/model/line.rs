//! Logical lines produced by paragraph reassembly.

use serde::{Deserialize, Serialize};

/// One classified output unit of reassembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum LogicalLine {
    /// Blank separator
    Blank,
    /// Structural heading line (e.g. "Issue: ...")
    Marker(String),
    /// Bullet or numbered entry
    ListItem(String),
    /// One or more raw lines joined by single spaces
    Paragraph(String),
}

impl LogicalLine {
    /// Text of the line as it appears in output. `Blank` renders empty.
    pub fn as_text(&self) -> &str {
        match self {
            LogicalLine::Blank => "",
            LogicalLine::Marker(text) | LogicalLine::ListItem(text) | LogicalLine::Paragraph(text) => {
                text
            }
        }
    }

    /// Check if this is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self, LogicalLine::Blank)
    }
}
