//! Text reconstruction engine.
//!
//! Turns layout-fragmented extracted lines back into paragraphs while keeping
//! markers, list items and blank separators, then canonicalizes punctuation
//! and whitespace for the whole document.
//!
//! ```
//! use undoc::reflow::{normalize, reflow_block};
//!
//! let text = reflow_block("The quick brown fox\njumps over the lazy dog.");
//! assert_eq!(normalize(&text), "The quick brown fox jumps over the lazy dog.");
//! ```

mod classify;
mod continuation;
mod normalize;
mod reassemble;

pub use classify::{classify, is_list_item, is_marker, LineKind, BULLET_GLYPHS, MARKER_KEYWORDS};
pub use continuation::{is_continuation, is_sentence_end};
pub use normalize::{normalize, NormalizeOptions, Normalizer};
pub use reassemble::{reassemble, reflow_block, render_lines};
