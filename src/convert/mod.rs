//! File conversion: extract, reconstruct, normalize and write `.txt` output.
//!
//! [`Converter`] is the entry point. It owns an output directory and an
//! [`ExtractorRegistry`], and returns a typed [`Result`] for every file, so
//! callers never have to inspect message text to tell success from failure.
//!
//! # Example
//!
//! ```no_run
//! use undoc::convert::{ConvertOptions, Converter};
//!
//! fn main() -> undoc::Result<()> {
//!     let converter = Converter::new(ConvertOptions::new().with_output_dir("out"))?;
//!     let conversion = converter.convert("brief.docx")?;
//!     println!("wrote {}", conversion.output_path.display());
//!
//!     let report = converter.convert_batch(&["a.pdf", "b.docx", "old.doc"]);
//!     println!("{} ok, {} failed", report.succeeded(), report.failed());
//!     Ok(())
//! }
//! ```

mod batch;
mod naming;

pub use batch::{BatchReport, FileReport};
pub use naming::{is_safe_output_name, output_file_name, OUTPUT_EXTENSION, TIMESTAMP_FORMAT};

use crate::error::{Error, Result};
use crate::extract::{ExtractOptions, ExtractorRegistry};
use crate::reflow::NormalizeOptions;
use crate::render::{self, ExtractionStats, RenderResult};
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default prefix for download locations in batch reports.
pub const DEFAULT_DOWNLOAD_PREFIX: &str = "/download/";

/// Options for file conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory receiving generated `.txt` files
    pub output_dir: PathBuf,

    /// Prefix joined with the output file name to form a download location
    pub download_prefix: String,

    /// Extraction options
    pub extract: ExtractOptions,

    /// Optional normalization passes
    pub normalize: NormalizeOptions,

    /// Convert batch files in parallel
    pub parallel: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            download_prefix: DEFAULT_DOWNLOAD_PREFIX.to_string(),
            extract: ExtractOptions::default(),
            normalize: NormalizeOptions::default(),
            parallel: true,
        }
    }
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the download prefix.
    pub fn with_download_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.download_prefix = prefix.into();
        self
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Set normalization options.
    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize = options;
        self
    }

    /// Enable or disable parallel batch conversion.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// A successfully converted file.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Input path
    pub source: PathBuf,

    /// Generated file name (no directory)
    pub output_file: String,

    /// Full path of the generated file
    pub output_path: PathBuf,

    /// Counts gathered while rendering
    pub stats: ExtractionStats,
}

/// Converts documents to plain text files.
pub struct Converter {
    options: ConvertOptions,
    registry: ExtractorRegistry,
}

impl Converter {
    /// Create a converter with the default extractors.
    ///
    /// The output directory is created if it does not exist.
    pub fn new(options: ConvertOptions) -> Result<Self> {
        Self::with_registry(options, ExtractorRegistry::with_defaults())
    }

    /// Create a converter with a custom extractor registry.
    pub fn with_registry(options: ConvertOptions, registry: ExtractorRegistry) -> Result<Self> {
        fs::create_dir_all(&options.output_dir)?;
        Ok(Self { options, registry })
    }

    /// Get the conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.options.output_dir
    }

    /// Extract and reconstruct a document without writing anything.
    pub fn text(&self, path: impl AsRef<Path>) -> Result<RenderResult> {
        render_file(
            &self.registry,
            path.as_ref(),
            &self.options.extract,
            &self.options.normalize,
        )
    }

    /// Convert one document and write `<stem>_<YYYYMMDD_HHMMSS>.txt`.
    pub fn convert(&self, path: impl AsRef<Path>) -> Result<Conversion> {
        let path = path.as_ref();
        let rendered = self.text(path)?;

        let name = output_file_name(path, chrono::Local::now().naive_local());
        let (output_file, output_path, mut file) =
            naming::create_unique(&self.options.output_dir, &name)?;
        write_or_remove(&output_path, &mut file, &rendered.content)?;

        log::info!(
            "Converted {} -> {} ({} chars)",
            path.display(),
            output_path.display(),
            rendered.content_len()
        );

        Ok(Conversion {
            source: path.to_path_buf(),
            output_file,
            output_path,
            stats: rendered.stats,
        })
    }

    /// Convert several documents, one report per input in input order.
    ///
    /// A failing file never aborts the batch.
    pub fn convert_batch<P>(&self, paths: &[P]) -> BatchReport
    where
        P: AsRef<Path> + Sync,
    {
        let results = if self.options.parallel {
            paths
                .par_iter()
                .map(|p| self.report(p.as_ref()))
                .collect()
        } else {
            paths.iter().map(|p| self.report(p.as_ref())).collect()
        };

        BatchReport { results }
    }

    fn report(&self, path: &Path) -> FileReport {
        match self.convert(path) {
            Ok(conversion) => {
                FileReport::success(path, &conversion, &self.options.download_prefix)
            }
            Err(e) => {
                log::warn!("Failed to convert {}: {}", path.display(), e);
                FileReport::failure(path, &e)
            }
        }
    }

    /// Resolve a generated file name to its path in the output directory.
    ///
    /// Names containing path separators or `..` are rejected as not found.
    pub fn resolve_output(&self, name: &str) -> Result<PathBuf> {
        if !is_safe_output_name(name) {
            return Err(Error::NotFound(PathBuf::from(name)));
        }
        let path = self.options.output_dir.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(Error::NotFound(PathBuf::from(name)))
        }
    }
}

/// Extract, reconstruct and normalize one file.
pub(crate) fn render_file(
    registry: &ExtractorRegistry,
    path: &Path,
    extract: &ExtractOptions,
    normalize: &NormalizeOptions,
) -> Result<RenderResult> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let doc = registry.extract(path, extract)?;
    let rendered = render::to_text_with_stats(&doc, normalize);

    if rendered.is_empty() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        log::warn!("No text extracted from {}", path.display());
        return Err(Error::EmptyResult(name));
    }

    Ok(rendered)
}

/// Write `content`, removing the freshly created file at `path` if the write fails.
fn write_or_remove<W: Write>(path: &Path, writer: &mut W, content: &str) -> Result<()> {
    if let Err(e) = writer.write_all(content.as_bytes()).and_then(|_| writer.flush()) {
        log::warn!("Failed to write {}: {}", path.display(), e);
        let _ = fs::remove_file(path);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn converter(dir: &Path) -> Converter {
        Converter::new(ConvertOptions::new().with_output_dir(dir.join("out"))).unwrap()
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_removes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report_20240101_000000.txt");
        fs::File::create(&path).unwrap();

        let err = write_or_remove(&path, &mut FailingWriter, "some text").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!path.exists());
    }

    #[test]
    fn test_successful_write_keeps_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let mut file = fs::File::create(&path).unwrap();

        write_or_remove(&path, &mut file, "some text").unwrap();
        drop(file);
        assert_eq!(fs::read_to_string(&path).unwrap(), "some text");
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.output_dir, PathBuf::from("output"));
        assert_eq!(options.download_prefix, "/download/");
        assert!(options.parallel);
    }

    #[test]
    fn test_new_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let converter = converter(dir.path());
        assert!(converter.output_dir().is_dir());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = converter(dir.path())
            .convert(dir.path().join("absent.pdf"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_legacy_doc_rejected_regardless_of_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minutes.doc");
        fs::write(&path, "plain text pretending to be a document").unwrap();

        let err = converter(dir.path()).convert(&path).unwrap_err();
        assert!(matches!(err, Error::LegacyDoc));
        assert_eq!(
            err.to_string(),
            "Old .doc format is not supported. Please save as .docx"
        );
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let err = converter(dir.path()).convert(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn test_resolve_output_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("secret.txt"), "x").unwrap();
        let converter = converter(dir.path());

        for name in ["../secret.txt", "..", "/etc/passwd", "a/b.txt"] {
            let err = converter.resolve_output(name).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound, "{name}");
        }
    }

    #[test]
    fn test_resolve_output_finds_existing() {
        let dir = tempfile::tempdir().unwrap();
        let converter = converter(dir.path());
        fs::write(converter.output_dir().join("a_20240101_000000.txt"), "x").unwrap();

        let path = converter.resolve_output("a_20240101_000000.txt").unwrap();
        assert!(path.is_file());
        assert!(converter.resolve_output("b_20240101_000000.txt").is_err());
    }
}
