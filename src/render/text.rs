//! Plain text rendering for extracted documents.

use crate::model::{BlockKind, ExtractedDocument, LogicalLine, TextBlock};
use crate::reflow::{reassemble, render_lines, NormalizeOptions, Normalizer};

use super::{ExtractionStats, RenderResult};

/// Separator placed between rendered blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Convert a document to normalized plain text.
pub fn to_text(doc: &ExtractedDocument, options: &NormalizeOptions) -> String {
    to_text_with_stats(doc, options).content
}

/// Convert a document to normalized plain text and collect statistics.
///
/// Every block is rendered on its own so that no paragraph crosses a page or
/// table boundary. Blocks are joined with a blank line and the joined text is
/// normalized once.
pub fn to_text_with_stats(doc: &ExtractedDocument, options: &NormalizeOptions) -> RenderResult {
    let mut stats = ExtractionStats::new();
    let mut parts = Vec::with_capacity(doc.blocks.len());

    for block in &doc.blocks {
        let rendered = render_block(block, &mut stats);
        if rendered.is_empty() {
            continue;
        }

        stats.block_count += 1;
        if let BlockKind::Page(_) = block.kind {
            stats.page_count += 1;
        }
        parts.push(rendered);
    }

    let content = Normalizer::new(options.clone()).process(&parts.join(BLOCK_SEPARATOR));
    stats.count_text(&content);

    RenderResult::new(content, stats)
}

fn render_block(block: &TextBlock, stats: &mut ExtractionStats) -> String {
    if block.is_table() {
        let rows: Vec<&str> = block
            .lines
            .iter()
            .map(|row| row.as_str())
            .filter(|row| !row.trim().is_empty())
            .collect();
        if !rows.is_empty() {
            stats.table_count += 1;
            stats.table_row_count += rows.len() as u32;
        }
        return rows.join("\n");
    }

    let lines = reassemble(&block.lines);
    for line in &lines {
        match line {
            LogicalLine::Paragraph(_) => stats.paragraph_count += 1,
            LogicalLine::ListItem(_) => stats.list_item_count += 1,
            LogicalLine::Marker(_) => stats.marker_count += 1,
            LogicalLine::Blank => {}
        }
    }
    render_lines(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::DocumentFormat;

    fn pdf_doc(pages: &[&str]) -> ExtractedDocument {
        let mut doc = ExtractedDocument::new(DocumentFormat::Pdf);
        for (i, text) in pages.iter().enumerate() {
            doc.add_block(TextBlock::from_text(BlockKind::Page(i as u32 + 1), text));
        }
        doc
    }

    #[test]
    fn test_pages_joined_with_blank_line() {
        let doc = pdf_doc(&["First page text\nwraps here.", "Second page."]);
        let text = to_text(&doc, &NormalizeOptions::default());
        assert_eq!(text, "First page text wraps here.\n\nSecond page.");
    }

    #[test]
    fn test_paragraph_never_spans_pages() {
        let doc = pdf_doc(&["A sentence cut at the", "end of the page."]);
        let text = to_text(&doc, &NormalizeOptions::default());
        assert_eq!(text, "A sentence cut at the\n\nend of the page.");
    }

    #[test]
    fn test_table_bypasses_reassembly() {
        let mut doc = ExtractedDocument::new(DocumentFormat::Docx);
        doc.add_block(TextBlock::from_text(BlockKind::Paragraphs, "Intro"));
        doc.add_block(TextBlock::table(vec![
            "Item | Cost".to_string(),
            "lower case row | 3".to_string(),
        ]));
        let text = to_text(&doc, &NormalizeOptions::default());
        assert_eq!(text, "Intro\n\nItem | Cost\nlower case row | 3");
    }

    #[test]
    fn test_normalized_once_after_join() {
        let doc = pdf_doc(&["\u{201C}Quoted\u{201D}   text \u{2014} here.", "• bullet"]);
        let text = to_text(&doc, &NormalizeOptions::default());
        assert_eq!(text, "\"Quoted\" text - here.\n\n* bullet");
    }

    #[test]
    fn test_blank_blocks_skipped() {
        let doc = pdf_doc(&["  \n ", "Only text."]);
        let result = to_text_with_stats(&doc, &NormalizeOptions::default());
        assert_eq!(result.content, "Only text.");
        assert_eq!(result.stats.block_count, 1);
        assert_eq!(result.stats.page_count, 1);
    }

    #[test]
    fn test_stats() {
        let mut doc = pdf_doc(&["Issue 7\nSome prose that\ncontinues.\n1. first\n2. second"]);
        doc.add_block(TextBlock::table(vec!["a | b".into(), "c | d".into()]));
        let result = to_text_with_stats(&doc, &NormalizeOptions::default());

        assert_eq!(result.stats.marker_count, 1);
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.list_item_count, 2);
        assert_eq!(result.stats.table_count, 1);
        assert_eq!(result.stats.table_row_count, 2);
        assert_eq!(result.stats.block_count, 2);
    }

    #[test]
    fn test_empty_document() {
        let doc = ExtractedDocument::new(DocumentFormat::Pdf);
        let result = to_text_with_stats(&doc, &NormalizeOptions::default());
        assert!(result.is_empty());
        assert_eq!(result.stats, ExtractionStats::default());
    }
}
