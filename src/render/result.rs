//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document: the final text and what went into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The normalized plain text
    pub content: String,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ExtractionStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// True if no text survived rendering.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Blocks that rendered to non-empty text
    pub block_count: u32,

    /// PDF pages that contributed text
    pub page_count: u32,

    /// Tables emitted
    pub table_count: u32,

    /// Table rows emitted
    pub table_row_count: u32,

    /// Paragraphs after reassembly
    pub paragraph_count: u32,

    /// List items
    pub list_item_count: u32,

    /// Marker lines
    pub marker_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
