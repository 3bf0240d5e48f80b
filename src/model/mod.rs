//! Document model for extracted text.
//!
//! Extractors produce an [`ExtractedDocument`]: an ordered list of
//! [`TextBlock`]s holding raw lines. Paragraph reconstruction turns the lines
//! of each block into [`LogicalLine`]s.

mod block;
mod document;
mod line;

pub use block::{BlockKind, TextBlock};
pub use document::{ExtractedDocument, Metadata};
pub use line::LogicalLine;
