//! Heuristics deciding which strings are worth translating
//!
//! Two classifiers live here: [`TextFilter`] for strings pulled out of UI
//! markup, and [`is_non_english_text`] for single words under the cursor.

use crate::lookup::is_foreign_term;

/// Common English UI words that never need translating
const COMMON_ENGLISH_UI_WORDS: &[&str] = &[
    "ok", "cancel", "yes", "no", "save", "delete", "edit", "add", "remove", "submit", "reset",
    "close", "open", "search", "filter", "sort", "help",
];

/// Word endings typical of Spanish, French, German, Dutch and Russian
const NON_ENGLISH_SUFFIXES: &[&str] = &["ción", "ment", "ung", "iteit", "ство"];

/// English programming keywords skipped by inline translation
const COMMON_KEYWORDS: &[&str] = &[
    "function", "class", "method", "variable", "const", "let", "var", "if", "else", "for",
    "while", "do", "return", "import", "export", "true", "false", "null", "undefined", "string",
    "number", "boolean",
];

/// Why a candidate string was accepted or rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVerdict {
    TooShort,
    NoLetters,
    CommonEnglish,
    NonLatinCharacters,
    NonEnglishSuffix,
    KnownForeignTerm,
    LikelyEnglish,
}

impl FilterVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            FilterVerdict::NonLatinCharacters
                | FilterVerdict::NonEnglishSuffix
                | FilterVerdict::KnownForeignTerm
        )
    }
}

/// Classifier for extracted UI strings
///
/// Rules are applied in order and the first match decides.
#[derive(Debug, Clone)]
pub struct TextFilter {
    min_length: usize,
}

impl Default for TextFilter {
    fn default() -> Self {
        Self { min_length: 2 }
    }
}

impl TextFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_translate(&self, text: &str) -> bool {
        self.classify(text).is_accepted()
    }

    pub fn classify(&self, text: &str) -> FilterVerdict {
        if text.chars().count() < self.min_length {
            return FilterVerdict::TooShort;
        }

        if !text.chars().any(char::is_alphabetic) {
            return FilterVerdict::NoLetters;
        }

        let lower = text.to_lowercase();
        if COMMON_ENGLISH_UI_WORDS.contains(&lower.as_str()) {
            return FilterVerdict::CommonEnglish;
        }

        if text.chars().any(|c| !c.is_ascii() && c.is_alphabetic()) {
            return FilterVerdict::NonLatinCharacters;
        }

        if NON_ENGLISH_SUFFIXES
            .iter()
            .any(|suffix| lower.ends_with(suffix))
        {
            return FilterVerdict::NonEnglishSuffix;
        }

        if is_foreign_term(&lower) {
            return FilterVerdict::KnownForeignTerm;
        }

        FilterVerdict::LikelyEnglish
    }
}

/// Whether a word under the cursor should be offered for translation
///
/// Anything outside plain ASCII letters, digits, whitespace and common
/// punctuation is translatable. Plain ASCII words are translatable unless
/// they are a common programming keyword.
pub fn is_non_english_text(text: &str) -> bool {
    let plain = text.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || c.is_whitespace()
            || matches!(
                c,
                '-' | '_' | '.' | ',' | '!' | '?' | ';' | ':' | '(' | ')' | '[' | ']' | '{' | '}'
                    | '\'' | '"'
            )
    });

    if plain {
        return !COMMON_KEYWORDS.contains(&text.to_lowercase().as_str());
    }
    true
}
