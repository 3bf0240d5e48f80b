//! PDF text extraction using lopdf.

use lopdf::Document as LopdfDocument;
use std::path::Path;

use super::{ErrorMode, ExtractOptions, Extractor};
use crate::detect::{pdf_version, DocumentFormat};
use crate::error::{Error, Result};
use crate::model::{BlockKind, ExtractedDocument, Metadata, TextBlock};

/// PDF extractor. Produces one block per page that holds text.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    _private: (),
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn load(&self, data: &[u8]) -> Result<(LopdfDocument, Option<String>)> {
        let version = pdf_version(data)
            .ok_or_else(|| Error::Pdf("missing %PDF- header".to_string()))?;

        let doc = LopdfDocument::load_mem(data)?;
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok((doc, Some(version)))
    }

    fn extract_document(
        &self,
        doc: &LopdfDocument,
        version: Option<String>,
        options: &ExtractOptions,
    ) -> Result<ExtractedDocument> {
        let mut document = ExtractedDocument::new(DocumentFormat::Pdf);
        let pages = doc.get_pages();

        document.metadata = Metadata {
            page_count: pages.len() as u32,
            pdf_version: version,
            ..read_info(doc)
        };

        for page_num in pages.keys().copied() {
            if !options.pages.includes(page_num) {
                continue;
            }

            let text = match doc.extract_text(&[page_num]) {
                Ok(text) => text,
                Err(e) => {
                    if options.error_mode == ErrorMode::Strict {
                        return Err(Error::Pdf(format!("page {}: {}", page_num, e)));
                    }
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    continue;
                }
            };

            if text.trim().is_empty() {
                log::debug!("page {} has no text layer", page_num);
                continue;
            }

            document.add_block(TextBlock::from_text(BlockKind::Page(page_num), &text));
        }

        Ok(document)
    }
}

impl Extractor for PdfExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn extract(&self, path: &Path, options: &ExtractOptions) -> Result<ExtractedDocument> {
        let data = std::fs::read(path)?;
        self.extract_bytes(&data, options)
    }

    fn extract_bytes(&self, bytes: &[u8], options: &ExtractOptions) -> Result<ExtractedDocument> {
        let (doc, version) = self.load(bytes)?;
        self.extract_document(&doc, version, options)
    }
}

/// Read title and author from the trailer's Info dictionary.
fn read_info(doc: &LopdfDocument) -> Metadata {
    let mut metadata = Metadata::default();

    if let Ok(info) = doc.trailer.get(b"Info") {
        if let Ok(info_ref) = info.as_reference() {
            if let Ok(info_dict) = doc.get_dictionary(info_ref) {
                metadata.title = get_string_from_dict(info_dict, b"Title");
                metadata.author = get_string_from_dict(info_dict, b"Author");
            }
        }
    }

    metadata
}

fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    let value = match dict.get(key).ok()? {
        lopdf::Object::String(bytes, _) => {
            // UTF-16BE with BOM is the PDF text string encoding for Unicode
            if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
                let utf16: Vec<u16> = bytes[2..]
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                String::from_utf16(&utf16).ok()
            } else {
                String::from_utf8(bytes.clone())
                    .ok()
                    .or_else(|| Some(bytes.iter().map(|&b| b as char).collect()))
            }
        }
        _ => None,
    };
    value.filter(|s| !s.trim().is_empty())
}
