//! Source extractors: pull ordered text blocks out of PDF and Word documents.
//!
//! Extraction is delegated to document libraries (`lopdf` for PDF, `zip` +
//! `quick-xml` for DOCX). Each extractor only produces [`TextBlock`]s; the
//! reconstruction itself happens in [`crate::render`].
//!
//! # Example
//!
//! ```no_run
//! use undoc::extract::{ExtractOptions, ExtractorRegistry};
//! use std::path::Path;
//!
//! fn main() -> undoc::Result<()> {
//!     let registry = ExtractorRegistry::with_defaults();
//!     let doc = registry.extract(Path::new("report.docx"), &ExtractOptions::default())?;
//!     println!("{} blocks", doc.block_count());
//!     Ok(())
//! }
//! ```
//!
//! [`TextBlock`]: crate::model::TextBlock

mod docx;
mod options;
mod pdf;

pub use docx::DocxExtractor;
pub use options::{ErrorMode, ExtractOptions, PageSelection};
pub use pdf::PdfExtractor;

use crate::detect::DocumentFormat;
use crate::error::{Error, Result};
use crate::model::ExtractedDocument;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for document text extractors.
///
/// Implement this trait to add support for a new document format.
pub trait Extractor: Send + Sync {
    /// Get the supported file extensions for this extractor.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["pdf"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract text blocks from a file at the given path.
    fn extract(&self, path: &Path, options: &ExtractOptions) -> Result<ExtractedDocument>;

    /// Extract text blocks from in-memory file content.
    fn extract_bytes(&self, bytes: &[u8], options: &ExtractOptions) -> Result<ExtractedDocument>;

    /// Check if this extractor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for document extractors.
///
/// Maps file extensions to extractors.
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn Extractor>>,
    by_name: HashMap<String, Arc<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the PDF and DOCX extractors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfExtractor::new()));
        registry.register(Arc::new(DocxExtractor::new()));
        registry
    }

    /// Register an extractor for all its supported extensions.
    pub fn register(&mut self, extractor: Arc<dyn Extractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors.insert(ext.to_lowercase(), extractor.clone());
        }
        self.by_name
            .insert(extractor.name().to_lowercase(), extractor);
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn Extractor>> {
        self.extractors.get(&ext.to_lowercase()).cloned()
    }

    /// Get an extractor by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn Extractor>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.extractors.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extractors.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Extract a file using the extractor registered for its extension.
    ///
    /// Legacy `.doc` files are rejected before any lookup.
    pub fn extract(&self, path: &Path, options: &ExtractOptions) -> Result<ExtractedDocument> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;

        if DocumentFormat::from_extension(ext) == Some(DocumentFormat::LegacyDoc) {
            return Err(Error::LegacyDoc);
        }

        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;

        log::debug!("extracting {} with {}", path.display(), extractor.name());
        extractor.extract(path, options)
    }

    /// Extract bytes using the extension to pick the extractor.
    pub fn extract_bytes(
        &self,
        bytes: &[u8],
        ext: &str,
        options: &ExtractOptions,
    ) -> Result<ExtractedDocument> {
        if DocumentFormat::from_extension(ext) == Some(DocumentFormat::LegacyDoc) {
            return Err(Error::LegacyDoc);
        }

        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(format!(".{}", ext)))?;

        extractor.extract_bytes(bytes, options)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
