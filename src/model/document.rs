//! Document-level types.

use super::{BlockKind, TextBlock};
use crate::detect::DocumentFormat;
use serde::{Deserialize, Serialize};

/// Ordered text blocks pulled out of one source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Source format
    pub format: DocumentFormat,

    /// Document metadata
    pub metadata: Metadata,

    /// Blocks in document order
    pub blocks: Vec<TextBlock>,
}

impl ExtractedDocument {
    /// Create a new empty document.
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            metadata: Metadata::default(),
            blocks: Vec::new(),
        }
    }

    /// Append a block.
    pub fn add_block(&mut self, block: TextBlock) {
        self.blocks.push(block);
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of table blocks.
    pub fn table_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_table()).count()
    }

    /// Page numbers that produced a block.
    pub fn pages_with_text(&self) -> Vec<u32> {
        self.blocks
            .iter()
            .filter_map(|b| match b.kind {
                BlockKind::Page(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    /// Check if the document has no blocks with text.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(TextBlock::is_blank)
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Total number of pages (PDF only)
    pub page_count: u32,

    /// PDF header version (e.g., "1.7")
    pub pdf_version: Option<String>,
}
