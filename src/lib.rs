//! # undoc
//!
//! PDF and Word (`.docx`) to plain text conversion with paragraph
//! reconstruction.
//!
//! Text pulled out of documents arrives as visual lines: paragraphs are
//! broken wherever the page wrapped them. This library reassembles those
//! fragments into logical paragraphs while keeping section markers and list
//! items on their own lines, then normalizes typographic characters and
//! whitespace.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undoc::extract_text;
//!
//! fn main() -> undoc::Result<()> {
//!     let text = extract_text("brief.pdf")?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! Writing output files, with per-file reports for batches:
//!
//! ```no_run
//! use undoc::{ConvertOptions, Converter};
//!
//! fn main() -> undoc::Result<()> {
//!     let converter = Converter::new(ConvertOptions::new().with_output_dir("out"))?;
//!     let report = converter.convert_batch(&["a.pdf", "b.docx"]);
//!     println!("{}", report.to_json().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Paragraph reconstruction**: wrapped lines are merged back together
//! - **Structure preservation**: section markers, numbered and bulleted items
//! - **DOCX tables**: rows rendered as ` | `-separated cells
//! - **Typed errors**: not found, unsupported format, extraction failure, empty result
//! - **Parallel batches**: uses Rayon across files

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod reflow;
pub mod render;

// Re-export commonly used types
pub use convert::{BatchReport, Conversion, ConvertOptions, Converter, FileReport};
pub use detect::{detect_format_from_bytes, detect_format_from_path, DocumentFormat};
pub use error::{Error, ErrorKind, Result};
pub use extract::{
    DocxExtractor, ErrorMode, ExtractOptions, Extractor, ExtractorRegistry, PageSelection,
    PdfExtractor,
};
pub use model::{BlockKind, ExtractedDocument, LogicalLine, Metadata, TextBlock};
pub use reflow::{normalize, reflow_block, NormalizeOptions, Normalizer};
pub use render::{ExtractionStats, RenderResult};

use std::path::Path;

/// Extract the text blocks of a PDF or DOCX file.
///
/// # Example
///
/// ```no_run
/// use undoc::extract_document;
///
/// let doc = extract_document("brief.docx").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn extract_document<P: AsRef<Path>>(path: P) -> Result<ExtractedDocument> {
    Undoc::new().extract(path)
}

/// Extract the text blocks of in-memory document content.
///
/// `ext` is the file extension without the dot (`"pdf"` or `"docx"`).
pub fn extract_document_bytes(data: &[u8], ext: &str) -> Result<ExtractedDocument> {
    ExtractorRegistry::with_defaults().extract_bytes(data, ext, &ExtractOptions::default())
}

/// Extract reconstructed, normalized plain text from a file.
///
/// Fails with [`Error::EmptyResult`] when the document holds no text.
///
/// # Example
///
/// ```no_run
/// use undoc::extract_text;
///
/// let text = extract_text("brief.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(Undoc::new().parse(path)?.to_text())
}

/// Reconstruct and normalize raw text that was extracted elsewhere.
///
/// Blocks separated by blank lines are reassembled independently.
///
/// ```
/// let text = undoc::reflow_text("The policy\napplies broadly.\n\nIssue 2\n- point");
/// assert_eq!(text, "The policy applies broadly.\n\nIssue 2\n- point");
/// ```
pub fn reflow_text(raw: &str) -> String {
    let reassembled: Vec<String> = raw
        .split("\n\n")
        .map(reflow_block)
        .filter(|block| !block.is_empty())
        .collect();
    normalize(&reassembled.join(render::BLOCK_SEPARATOR))
}

/// Builder for extracting and rendering documents.
///
/// # Example
///
/// ```no_run
/// use undoc::Undoc;
///
/// let text = Undoc::new()
///     .lenient()
///     .extended()
///     .parse("scan.pdf")?
///     .to_text();
/// # Ok::<(), undoc::Error>(())
/// ```
pub struct Undoc {
    extract_options: ExtractOptions,
    normalize_options: NormalizeOptions,
    registry: ExtractorRegistry,
}

impl Undoc {
    /// Create a new builder with the default extractors.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            normalize_options: NormalizeOptions::default(),
            registry: ExtractorRegistry::with_defaults(),
        }
    }

    /// Skip unreadable PDF pages instead of failing.
    pub fn lenient(mut self) -> Self {
        self.extract_options = self.extract_options.lenient();
        self
    }

    /// Set page selection (PDF only).
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.extract_options = self.extract_options.with_pages(pages);
        self
    }

    /// Enable every optional normalization pass.
    pub fn extended(mut self) -> Self {
        self.normalize_options = NormalizeOptions::extended();
        self
    }

    /// Set normalization options.
    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize_options = options;
        self
    }

    /// Extract the blocks of a file without rendering them.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<ExtractedDocument> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        self.registry.extract(path, &self.extract_options)
    }

    /// Extract and render a file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UndocResult> {
        let path = path.as_ref();
        let rendered =
            convert::render_file(&self.registry, path, &self.extract_options, &self.normalize_options)?;
        Ok(UndocResult { rendered })
    }
}

impl Default for Undoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendered text of one document.
#[derive(Debug, Clone)]
pub struct UndocResult {
    rendered: RenderResult,
}

impl UndocResult {
    /// Take the rendered text.
    pub fn to_text(self) -> String {
        self.rendered.content
    }

    /// Borrow the rendered text.
    pub fn text(&self) -> &str {
        &self.rendered.content
    }

    /// Counts gathered while rendering.
    pub fn stats(&self) -> &ExtractionStats {
        &self.rendered.stats
    }
}
