//! Text blocks: the unit of independent reassembly.

use serde::{Deserialize, Serialize};

/// Where a block came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// One PDF page (1-indexed page number)
    Page(u32),
    /// A maximal run of non-empty Word paragraphs
    Paragraphs,
    /// A Word table, one row per line; never reassembled
    Table,
}

/// An ordered sequence of raw lines reassembled on its own.
///
/// No paragraph ever spans two blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Block origin
    pub kind: BlockKind,

    /// Raw lines, untrimmed
    pub lines: Vec<String>,
}

impl TextBlock {
    /// Create a block from lines.
    pub fn new(kind: BlockKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    /// Create a block by splitting extracted text on `'\n'`.
    pub fn from_text(kind: BlockKind, text: &str) -> Self {
        Self::new(kind, text.split('\n').map(str::to_string).collect())
    }

    /// Create a table block from row lines.
    pub fn table(rows: Vec<String>) -> Self {
        Self::new(BlockKind::Table, rows)
    }

    /// True for table blocks, which bypass paragraph reassembly.
    pub fn is_table(&self) -> bool {
        self.kind == BlockKind::Table
    }

    /// True if every line is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    /// Number of raw lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_keeps_trailing_empty_line() {
        let block = TextBlock::from_text(BlockKind::Page(1), "first\n  second \n");
        assert_eq!(block.lines, vec!["first", "  second ", ""]);
        assert!(!block.is_blank());
    }

    #[test]
    fn test_is_blank() {
        assert!(TextBlock::from_text(BlockKind::Page(2), " \n\t\n").is_blank());
        assert!(TextBlock::new(BlockKind::Paragraphs, Vec::new()).is_blank());
    }

    #[test]
    fn test_table_block() {
        let block = TextBlock::table(vec!["a | b".into()]);
        assert!(block.is_table());
        assert_eq!(block.line_count(), 1);
    }
}
