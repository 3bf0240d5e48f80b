//! Document format detection.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Input document formats known to the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word processing document
    Docx,
    /// Legacy binary Word document (never converted)
    LegacyDoc,
}

impl DocumentFormat {
    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "doc" => Some(DocumentFormat::LegacyDoc),
            _ => None,
        }
    }

    /// Determine the format from a path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical lowercase extension.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::LegacyDoc => "doc",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "PDF"),
            DocumentFormat::Docx => write!(f, "DOCX"),
            DocumentFormat::LegacyDoc => write!(f, "DOC (legacy)"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Local file header of a zip container (DOCX is a zip).
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// OLE2 compound file header used by legacy `.doc`.
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Sniff the format from the leading bytes of a file.
///
/// A zip header is reported as [`DocumentFormat::Docx`]; whether the archive
/// really holds a word processing document is only known once it is opened.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocumentFormat> {
    if data.starts_with(PDF_MAGIC) {
        Ok(DocumentFormat::Pdf)
    } else if data.starts_with(ZIP_MAGIC) {
        Ok(DocumentFormat::Docx)
    } else if data.starts_with(OLE_MAGIC) {
        Ok(DocumentFormat::LegacyDoc)
    } else {
        Err(Error::UnsupportedFormat(
            "unrecognized file signature".to_string(),
        ))
    }
}

/// Sniff the format of a file on disk.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocumentFormat> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let mut header = Vec::with_capacity(16);
    File::open(path)?.take(16).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Check if bytes start with a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    pdf_version(data).is_some()
}

/// Extract the header version (e.g. `"1.7"`) from PDF bytes.
pub fn pdf_version(data: &[u8]) -> Option<String> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return None;
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();
    if is_valid_version(&version) {
        Some(version)
    } else {
        None
    }
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    let chars: Vec<char> = version.chars().collect();
    chars.len() == 3 && chars[0].is_ascii_digit() && chars[1] == '.' && chars[2].is_ascii_digit()
}
