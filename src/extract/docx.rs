//! Word (.docx) text extraction using zip and quick-xml.
//!
//! The body of `word/document.xml` is streamed once in document order.
//! Consecutive non-empty paragraphs form one block; an empty paragraph or a
//! table ends the run. Each table becomes its own block with one line per row.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader as XmlReader;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

use super::{ExtractOptions, Extractor};
use crate::detect::DocumentFormat;
use crate::error::{Error, Result};
use crate::model::{BlockKind, ExtractedDocument, Metadata, TextBlock};

const DOCUMENT_PART: &str = "word/document.xml";
const CORE_PROPERTIES_PART: &str = "docProps/core.xml";

/// Separator between the cells of a table row.
pub const CELL_SEPARATOR: &str = " | ";

/// DOCX extractor.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor {
    _private: (),
}

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Extractor for DocxExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn extract(&self, path: &Path, options: &ExtractOptions) -> Result<ExtractedDocument> {
        let data = std::fs::read(path)?;
        self.extract_bytes(&data, options)
    }

    fn extract_bytes(&self, bytes: &[u8], _options: &ExtractOptions) -> Result<ExtractedDocument> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let xml = read_part(&mut archive, DOCUMENT_PART)?;
        let mut document = ExtractedDocument::new(DocumentFormat::Docx);
        document.blocks = parse_document_xml(&xml)?;

        if let Ok(core) = read_part(&mut archive, CORE_PROPERTIES_PART) {
            document.metadata = parse_core_properties(&core).unwrap_or_else(|e| {
                log::debug!("ignoring unreadable core properties: {}", e);
                Metadata::default()
            });
        }

        log::debug!(
            "docx: {} blocks ({} tables)",
            document.block_count(),
            document.table_count()
        );
        Ok(document)
    }
}

fn read_part<R: Read + std::io::Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut entry = archive.by_name(name)?;
    let mut buffer = Vec::new();
    entry.read_to_end(&mut buffer)?;
    String::from_utf8(buffer).map_err(|_| Error::Docx(format!("{} is not valid UTF-8", name)))
}

/// Streaming state for one pass over the document body.
#[derive(Default)]
struct BodyWalker {
    blocks: Vec<TextBlock>,

    /// Non-empty body paragraphs not yet emitted
    section: Vec<String>,

    /// Text of the outermost open paragraph
    paragraph: String,
    paragraph_depth: usize,
    in_text: bool,

    table_depth: usize,
    rows: Vec<String>,
    row: Vec<String>,
    cell: Vec<String>,

    // Depth inside text box content and `mc:Fallback` copies
    skip_depth: usize,
}

/// Elements whose text is either a duplicate rendition or floating box content.
fn is_skipped(name: &[u8]) -> bool {
    matches!(name, b"Fallback" | b"txbxContent")
}

impl BodyWalker {
    fn start(&mut self, e: &BytesStart) {
        let name = e.local_name();
        if is_skipped(name.as_ref()) {
            self.skip_depth += 1;
            return;
        }
        if self.skip_depth > 0 {
            return;
        }
        match name.as_ref() {
            b"p" => {
                if self.paragraph_depth == 0 {
                    self.paragraph.clear();
                }
                self.paragraph_depth += 1;
            }
            b"t" => self.in_text = true,
            b"tbl" => {
                if self.table_depth == 0 {
                    self.flush_section();
                    self.rows.clear();
                }
                self.table_depth += 1;
            }
            b"tr" if self.table_depth == 1 => self.row.clear(),
            b"tc" if self.table_depth == 1 => self.cell.clear(),
            other => self.inline(other),
        }
    }

    fn empty(&mut self, e: &BytesStart) {
        if self.skip_depth > 0 {
            return;
        }
        match e.local_name().as_ref() {
            // <w:p/> is an empty paragraph
            b"p" if self.paragraph_depth == 0 => {
                self.paragraph.clear();
                self.end_paragraph();
            }
            other => self.inline(other),
        }
    }

    fn inline(&mut self, name: &[u8]) {
        if self.paragraph_depth == 0 {
            return;
        }
        match name {
            b"tab" => self.paragraph.push('\t'),
            b"br" | b"cr" => self.paragraph.push('\n'),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_text && self.paragraph_depth > 0 && self.skip_depth == 0 {
            self.paragraph.push_str(text);
        }
    }

    fn end(&mut self, name: &[u8]) {
        if is_skipped(name) {
            self.skip_depth = self.skip_depth.saturating_sub(1);
            return;
        }
        if self.skip_depth > 0 {
            return;
        }
        match name {
            b"t" => self.in_text = false,
            b"p" => {
                self.paragraph_depth = self.paragraph_depth.saturating_sub(1);
                if self.paragraph_depth == 0 {
                    self.end_paragraph();
                }
            }
            b"tc" if self.table_depth == 1 => {
                let cell = self.cell.join(" ");
                let cell = cell.trim();
                if !cell.is_empty() {
                    self.row.push(cell.to_string());
                }
            }
            b"tr" if self.table_depth == 1 => {
                if !self.row.is_empty() {
                    self.rows.push(self.row.join(CELL_SEPARATOR));
                }
            }
            b"tbl" => {
                self.table_depth = self.table_depth.saturating_sub(1);
                if self.table_depth == 0 && !self.rows.is_empty() {
                    let rows = std::mem::take(&mut self.rows);
                    self.blocks.push(TextBlock::table(rows));
                }
            }
            _ => {}
        }
    }

    fn end_paragraph(&mut self) {
        let text = self.paragraph.trim().to_string();
        self.paragraph.clear();

        if self.table_depth > 0 {
            if !text.is_empty() {
                self.cell.push(text);
            }
        } else if text.is_empty() {
            self.flush_section();
        } else {
            self.section.push(text);
        }
    }

    fn flush_section(&mut self) {
        if !self.section.is_empty() {
            let joined = self.section.join("\n");
            self.section.clear();
            self.blocks
                .push(TextBlock::from_text(BlockKind::Paragraphs, &joined));
        }
    }

    fn finish(mut self) -> Vec<TextBlock> {
        self.flush_section();
        self.blocks
    }
}

/// Parse `word/document.xml` into blocks in document order.
pub(crate) fn parse_document_xml(xml: &str) -> Result<Vec<TextBlock>> {
    let mut reader = XmlReader::from_str(xml);
    let mut walker = BodyWalker::default();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => walker.start(e),
            Event::Empty(ref e) => walker.empty(e),
            Event::Text(ref t) => walker.text(&t.unescape()?),
            Event::End(ref e) => walker.end(e.local_name().as_ref()),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(walker.finish())
}

/// Read title and creator from `docProps/core.xml`.
fn parse_core_properties(xml: &str) -> Result<Metadata> {
    let mut reader = XmlReader::from_str(xml);
    let mut metadata = Metadata::default();
    let mut current: Option<Vec<u8>> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => current = Some(e.local_name().as_ref().to_vec()),
            Event::Text(ref t) => {
                let value = t.unescape()?.trim().to_string();
                if value.is_empty() {
                    continue;
                }
                match current.as_deref() {
                    Some(b"title") => metadata.title = Some(value),
                    Some(b"creator") => metadata.author = Some(value),
                    _ => {}
                }
            }
            Event::End(_) => current = None,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(metadata)
}
