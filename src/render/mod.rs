//! Rendering extracted documents to their final plain text.

mod result;
mod text;

pub use result::{ExtractionStats, RenderResult};
pub use text::{to_text, to_text_with_stats, BLOCK_SEPARATOR};
