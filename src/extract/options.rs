//! Extraction options and configuration.

use crate::error::{Error, Result};
use std::ops::RangeInclusive;

/// Options for pulling text out of a source document.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Page selection (PDF only)
    pub pages: PageSelection,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip pages whose text cannot be extracted).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }
}

/// Error handling mode during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail the whole document on any page error
    #[default]
    Strict,
    /// Skip the failing page and continue
    Lenient,
}

/// Page selection for extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Extract all pages
    #[default]
    All,
    /// Extract a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Extract specific pages (1-indexed)
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        let invalid = || Error::InvalidPageRange(s.to_string());

        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let start: u32 = start.trim().parse().map_err(|_| invalid())?;
                let end: u32 = end.trim().parse().map_err(|_| invalid())?;
                if start == 0 || start > end {
                    return Err(invalid());
                }
                return Ok(PageSelection::Range(start..=end));
            }
        }

        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            let (start, end) = match part.split_once('-') {
                Some((a, b)) => (
                    a.trim().parse::<u32>().map_err(|_| invalid())?,
                    b.trim().parse::<u32>().map_err(|_| invalid())?,
                ),
                None => {
                    let p = part.parse::<u32>().map_err(|_| invalid())?;
                    (p, p)
                }
            };
            if start == 0 || start > end {
                return Err(invalid());
            }
            for p in start..=end {
                if !pages.contains(&p) {
                    pages.push(p);
                }
            }
        }

        pages.sort_unstable();
        Ok(PageSelection::Pages(pages))
    }
}
