//! Locating translated strings in a document
//!
//! A hint marks one occurrence of an original string that has a confident,
//! different translation. Editors render these as diagnostics.

use crate::model::TranslationRecord;
use serde::{Deserialize, Serialize};

/// Byte span plus the zero-based line and character column of its start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationHint {
    pub key: String,
    pub range: TextRange,
    pub original_text: String,
    pub translated_text: String,
    pub confidence: f64,
    pub message: String,
}

/// Every non-overlapping occurrence of `text` in `content`
pub fn find_text_ranges(content: &str, text: &str) -> Vec<TextRange> {
    if text.is_empty() {
        return Vec::new();
    }

    content
        .match_indices(text)
        .map(|(start, matched)| {
            let before = &content[..start];
            let line = before.matches('\n').count();
            let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
            TextRange {
                start,
                end: start + matched.len(),
                line,
                column: content[line_start..start].chars().count(),
            }
        })
        .collect()
}

/// Hints for records above `min_confidence` whose translation differs
pub fn translation_hints(
    content: &str,
    records: &[TranslationRecord],
    min_confidence: f64,
) -> Vec<TranslationHint> {
    records
        .iter()
        .filter(|r| r.confidence > min_confidence && r.original_text != r.translated_text)
        .flat_map(|record| {
            find_text_ranges(content, &record.original_text)
                .into_iter()
                .map(move |range| TranslationHint {
                    key: record.key.clone(),
                    range,
                    original_text: record.original_text.clone(),
                    translated_text: record.translated_text.clone(),
                    confidence: record.confidence,
                    message: format!(
                        "UI Translation available: \"{}\" → \"{}\"",
                        record.original_text, record.translated_text
                    ),
                })
        })
        .collect()
}
