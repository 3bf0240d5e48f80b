//! Output file naming.
//!
//! Output names are `<source stem>_<YYYYMMDD_HHMMSS>.txt`. When that name is
//! already taken in the output directory a counter is appended
//! (`<stem>_<timestamp>_1.txt`, ...), so concurrent conversions of files with
//! the same stem never overwrite each other.

use chrono::NaiveDateTime;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};

/// `strftime` format of the timestamp part.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Extension of generated files.
pub const OUTPUT_EXTENSION: &str = "txt";

const MAX_SUFFIX: u32 = 10_000;

/// Build the output file name for `source` generated at `at`.
pub fn output_file_name(source: &Path, at: NaiveDateTime) -> String {
    format!(
        "{}_{}.{}",
        source_stem(source),
        at.format(TIMESTAMP_FORMAT),
        OUTPUT_EXTENSION
    )
}

fn source_stem(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "document".to_string())
}

/// Insert a numeric suffix before the extension.
fn with_suffix(name: &str, n: u32) -> String {
    match name.rsplit_once('.') {
        Some((base, ext)) => format!("{}_{}.{}", base, n, ext),
        None => format!("{}_{}", name, n),
    }
}

/// Create a new file in `dir` named `name`, or the first free suffixed variant.
///
/// Returns the chosen name, its full path and the open file handle.
pub(crate) fn create_unique(dir: &Path, name: &str) -> io::Result<(String, PathBuf, File)> {
    let mut candidate = name.to_string();
    let mut n = 0;

    loop {
        let path = dir.join(&candidate);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((candidate, path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && n < MAX_SUFFIX => {
                n += 1;
                candidate = with_suffix(name, n);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Check that `name` is a bare file name that cannot escape its directory.
pub fn is_safe_output_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}
