//! Whole-document punctuation and whitespace normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n+").unwrap());

/// Character substitutions applied in order: bullets, dashes, single quotes,
/// double quotes.
const CHAR_MAP: [(char, char); 9] = [
    ('•', '*'),
    ('●', '*'),
    ('■', '*'),
    ('\u{2013}', '-'), // en dash
    ('\u{2014}', '-'), // em dash
    ('\u{2018}', '\''),
    ('\u{2019}', '\''),
    ('\u{201C}', '"'),
    ('\u{201D}', '"'),
];

const LIGATURES: [(&str, &str); 7] = [
    ("\u{FB00}", "ff"),  // ﬀ
    ("\u{FB01}", "fi"),  // ﬁ
    ("\u{FB02}", "fl"),  // ﬂ
    ("\u{FB03}", "ffi"), // ﬃ
    ("\u{FB04}", "ffl"), // ﬄ
    ("\u{FB05}", "st"),  // ﬅ (long s + t)
    ("\u{FB06}", "st"),  // ﬆ
];

/// Options for text normalization.
///
/// The default runs only the canonical passes. The extra passes are opt-in and
/// run before them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,
}

impl NormalizeOptions {
    /// Create options with only the canonical passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical passes plus every extra pass.
    pub fn extended() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            remove_replacement_char: true,
        }
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Enable or disable ligature expansion.
    pub fn with_ligature_fix(mut self, enabled: bool) -> Self {
        self.fix_ligatures = enabled;
        self
    }

    /// Enable or disable removal of U+FFFD.
    pub fn with_replacement_char_removal(mut self, enabled: bool) -> Self {
        self.remove_replacement_char = enabled;
        self
    }
}

/// Text normalization pipeline. Idempotent for every option set.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a new normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Process text through the normalization pipeline.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.fix_ligatures {
            for (ligature, replacement) in LIGATURES {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        // After the removals, which can leave a base letter next to a combining mark
        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        result = map_chars(&result);

        // Spaces only; tabs and newlines are left alone
        result = SPACE_RUN.replace_all(&result, " ").into_owned();

        result = BLANK_RUN.replace_all(&result, "\n\n").into_owned();

        result.trim().to_string()
    }
}

fn map_chars(text: &str) -> String {
    text.chars()
        .map(|c| {
            CHAR_MAP
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

/// Normalize text with the default options.
pub fn normalize(text: &str) -> String {
    Normalizer::default().process(text)
}
