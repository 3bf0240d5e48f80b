//! Per-file reports for batch conversion.

use crate::error::{Error, ErrorKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::Conversion;

/// Outcome of converting one file in a batch.
///
/// Serializes as `{original_file, converted_file, download_url}` on success
/// and `{original_file, error, error_kind}` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Name of the input file
    pub original_file: String,

    /// Generated output file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_file: Option<String>,

    /// Where the output can be fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    /// Human-readable failure, always starting with "Error"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Failure classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl FileReport {
    /// Report for a successful conversion.
    pub fn success(source: &Path, conversion: &Conversion, download_prefix: &str) -> Self {
        Self {
            original_file: display_name(source),
            converted_file: Some(conversion.output_file.clone()),
            download_url: Some(format!("{}{}", download_prefix, conversion.output_file)),
            error: None,
            error_kind: None,
        }
    }

    /// Report for a failed conversion.
    pub fn failure(source: &Path, error: &Error) -> Self {
        Self {
            original_file: display_name(source),
            converted_file: None,
            download_url: None,
            error: Some(error.report_message()),
            error_kind: Some(error.kind()),
        }
    }

    /// True if the file was converted.
    pub fn is_success(&self) -> bool {
        self.converted_file.is_some()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reports for a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// One report per input file
    pub results: Vec<FileReport>,
}

impl BatchReport {
    /// Number of converted files.
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Number of failed files.
    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    /// True if every file was converted.
    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ExtractionStats;
    use std::path::PathBuf;

    fn conversion(name: &str) -> Conversion {
        Conversion {
            source: PathBuf::from("in/brief.pdf"),
            output_file: name.to_string(),
            output_path: PathBuf::from("out").join(name),
            stats: ExtractionStats::default(),
        }
    }

    #[test]
    fn test_success_report_shape() {
        let report = FileReport::success(
            Path::new("in/brief.pdf"),
            &conversion("brief_20240309_140507.txt"),
            "/download/",
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["original_file"], "brief.pdf");
        assert_eq!(json["converted_file"], "brief_20240309_140507.txt");
        assert_eq!(json["download_url"], "/download/brief_20240309_140507.txt");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_report_shape() {
        let report = FileReport::failure(Path::new("old.doc"), &Error::LegacyDoc);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["original_file"], "old.doc");
        assert_eq!(
            json["error"],
            "Error: Old .doc format is not supported. Please save as .docx"
        );
        assert_eq!(json["error_kind"], "unsupported_format");
        assert!(json.get("converted_file").is_none());
        assert!(json.get("download_url").is_none());
    }

    #[test]
    fn test_batch_counts() {
        let report = BatchReport {
            results: vec![
                FileReport::success(Path::new("a.pdf"), &conversion("a.txt"), "/d/"),
                FileReport::failure(Path::new("b.txt"), &Error::UnsupportedFormat("b.txt".into())),
            ],
        };
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_succeeded());

        let round: BatchReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(round, report);
    }
}
