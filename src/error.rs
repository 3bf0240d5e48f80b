//! Error types for undoc library.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for undoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not exist.
    #[error("File {} not found", .0.display())]
    NotFound(PathBuf),

    /// The file extension is neither `.pdf` nor `.docx`.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Legacy binary Word document.
    #[error("Old .doc format is not supported. Please save as .docx")]
    LegacyDoc,

    /// The PDF container could not be read.
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// The DOCX container could not be read.
    #[error("DOCX extraction error: {0}")]
    Docx(String),

    /// The document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Extraction succeeded but produced no text.
    #[error("No text could be extracted from {0}")]
    EmptyResult(String),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Coarse classification of an [`Error`], stable across messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input file does not exist
    NotFound,
    /// Extension is not `.pdf` or `.docx` (includes legacy `.doc`)
    UnsupportedFormat,
    /// The document library could not parse the container
    ExtractionFailure,
    /// The container parsed but held no text
    EmptyResult,
    /// Caller supplied an invalid option value
    InvalidInput,
    /// Reading or writing a file failed
    Io,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::UnsupportedFormat(_) | Error::LegacyDoc => ErrorKind::UnsupportedFormat,
            Error::Pdf(_) | Error::Docx(_) | Error::Encrypted => ErrorKind::ExtractionFailure,
            Error::EmptyResult(_) => ErrorKind::EmptyResult,
            Error::InvalidPageRange(_) => ErrorKind::InvalidInput,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Message for per-file reports. Always starts with `"Error"`.
    pub fn report_message(&self) -> String {
        format!("Error: {}", self)
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::Pdf(err.to_string()),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::FileNotFound => {
                Error::Docx("missing word/document.xml".to_string())
            }
            _ => Error::Docx(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Docx(format!("malformed XML: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::LegacyDoc;
        assert_eq!(
            err.to_string(),
            "Old .doc format is not supported. Please save as .docx"
        );

        let err = Error::NotFound(PathBuf::from("missing.pdf"));
        assert_eq!(err.to_string(), "File missing.pdf not found");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::LegacyDoc.kind(), ErrorKind::UnsupportedFormat);
        assert_eq!(
            Error::UnsupportedFormat("txt".into()).kind(),
            ErrorKind::UnsupportedFormat
        );
        assert_eq!(Error::Encrypted.kind(), ErrorKind::ExtractionFailure);
        assert_eq!(Error::Docx("bad".into()).kind(), ErrorKind::ExtractionFailure);
        assert_eq!(
            Error::EmptyResult("scan.pdf".into()).kind(),
            ErrorKind::EmptyResult
        );
    }

    #[test]
    fn test_report_message_prefix() {
        let err = Error::Pdf("broken xref".into());
        assert_eq!(err.report_message(), "Error: PDF extraction error: broken xref");
        assert!(Error::LegacyDoc.report_message().starts_with("Error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::Docx(_)));
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::ExtractionFailure).unwrap();
        assert_eq!(json, "\"extraction_failure\"");
    }
}
