//! Decides whether a wrapped prose line continues onto the next line.
//!
//! PDF and Word extraction break sentences at arbitrary columns. The only
//! cheap signals left are the capitalization of the next line and the
//! punctuation at the end of the current one.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[.!?]['")\]]?\s*$"#).unwrap());

/// Trailing characters that signal the sentence carries on.
const CONTINUATION_SUFFIXES: [char; 3] = [',', ';', ':'];

/// Check if text ends with `.`, `!` or `?`, optionally followed by a closing
/// quote or bracket and trailing whitespace.
pub fn is_sentence_end(text: &str) -> bool {
    SENTENCE_END.is_match(text)
}

/// Check if `next` should be merged into the paragraph ending with `current`.
///
/// Both lines are expected trimmed. Merge is the default; the merge is refused
/// only when `next` starts uppercase after a finished sentence that does not
/// end in `,`, `;` or `:`.
pub fn is_continuation(current: &str, next: &str) -> bool {
    let first = match next.chars().next() {
        Some(c) => c,
        None => return false,
    };
    let starts_upper = first.is_uppercase();

    if starts_upper && !is_sentence_end(current) {
        return true;
    }

    !starts_upper || current.ends_with(CONTINUATION_SUFFIXES)
}
