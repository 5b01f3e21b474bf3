//! Hover and completion translations for words in source code
//!
//! Works on a single line of text and a character column, so hosts only need
//! to hand over the current line.

use crate::config::TranslatorConfig;
use crate::filter::is_non_english_text;
use crate::lookup::TranslationProvider;
use crate::model::{TranslationRecord, TranslationResult};
use serde::Serialize;
use tracing::debug;

const C_STYLE: &[&str] = &["//", "/*", "*/"];

/// Comment markers per editor language id
fn comment_markers(language_id: &str) -> &'static [&'static str] {
    match language_id {
        "python" | "ruby" => &["#"],
        "php" => &["//", "#", "/*", "*/"],
        "html" => &["<!--", "-->"],
        "css" => &["/*", "*/"],
        _ => C_STYLE,
    }
}

/// Byte offset of character `column`, clamped to the end of the line
fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

fn is_in_comment(line: &str, column: usize, language_id: &str) -> bool {
    let single_line = comment_markers(language_id)
        .iter()
        .filter(|marker| matches!(**marker, "//" | "#"))
        .filter_map(|marker| line.find(marker))
        .any(|start| column >= line[..start].chars().count());
    if single_line {
        return true;
    }

    // Block comments are only tracked within the line
    let before = &line[..byte_offset(line, column)];
    (before.contains("/*") && !before.contains("*/"))
        || (before.contains("<!--") && !before.contains("-->"))
}

fn is_in_string(line: &str, column: usize) -> bool {
    let mut single = false;
    let mut double = false;
    let mut backtick = false;
    let mut escaped = false;

    for c in line.chars().take(column) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\'' if !double && !backtick => single = !single,
            '"' if !single && !backtick => double = !double,
            '`' if !single && !double => backtick = !backtick,
            _ => {}
        }
    }

    single || double || backtick
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn is_identifier_at(line: &str, column: usize) -> bool {
    let chars: Vec<char> = line.chars().collect();
    if !chars.get(column).is_some_and(|c| is_identifier_char(*c)) {
        return false;
    }

    let mut start = column;
    while start > 0 && is_identifier_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = column;
    while end < chars.len() && is_identifier_char(chars[end]) {
        end += 1;
    }

    // Digits alone are a number, not an identifier
    chars[start..end].iter().any(|c| !c.is_ascii_digit())
}

/// What kind of code surrounds a cursor position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeContext {
    pub is_comment: bool,
    pub is_string: bool,
    pub is_identifier: bool,
    pub language: String,
}

impl CodeContext {
    /// Classify character `column` of `line`
    ///
    /// Words inside comments and string literals are not identifiers.
    pub fn detect(line: &str, column: usize, language_id: &str) -> Self {
        let is_comment = is_in_comment(line, column, language_id);
        let is_string = !is_comment && is_in_string(line, column);
        Self {
            is_comment,
            is_string,
            is_identifier: !is_comment && !is_string && is_identifier_at(line, column),
            language: language_id.to_string(),
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        if self.is_comment {
            Some("Comment")
        } else if self.is_string {
            Some("String literal")
        } else if self.is_identifier {
            Some("Identifier")
        } else {
            None
        }
    }

    /// Whether the configuration allows translating in this context
    pub fn allowed_by(&self, config: &TranslatorConfig) -> bool {
        !(self.is_comment && !config.translate_comments
            || self.is_string && !config.translate_strings
            || self.is_identifier && !config.translate_identifiers)
    }
}

/// The word touching character `column`, if any
///
/// A cursor just past the last character of a word still selects it.
pub fn word_at(line: &str, column: usize) -> Option<&str> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let chars: Vec<(usize, char)> = line.char_indices().collect();

    let anchor = if chars.get(column).is_some_and(|(_, c)| is_word(*c)) {
        column
    } else if column > 0 && chars.get(column - 1).is_some_and(|(_, c)| is_word(*c)) {
        column - 1
    } else {
        return None;
    };

    let mut start = anchor;
    while start > 0 && is_word(chars[start - 1].1) {
        start -= 1;
    }
    let mut end = anchor + 1;
    while end < chars.len() && is_word(chars[end].1) {
        end += 1;
    }

    let from = chars[start].0;
    let to = chars.get(end).map(|(i, _)| *i).unwrap_or(line.len());
    Some(&line[from..to])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverInfo {
    pub word: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub confidence_percent: u32,
    pub context: Option<&'static str>,
}

impl HoverInfo {
    pub fn to_markdown(&self) -> String {
        let mut markdown = format!(
            "**Translation:** {}\n\n*Source:* {} → {}\n\n*Confidence:* {}%\n\n",
            self.translated_text, self.source_language, self.target_language, self.confidence_percent
        );
        if let Some(context) = self.context {
            markdown.push_str(&format!("*Context:* {}", context));
        }
        markdown
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSuggestion {
    pub label: String,
    pub insert_text: String,
    pub filter_text: String,
    pub detail: String,
    pub documentation: String,
}

/// Inline translation for the word under the cursor or being typed
pub struct InlineTranslator {
    config: TranslatorConfig,
    provider: TranslationProvider,
}

impl InlineTranslator {
    pub fn new(config: TranslatorConfig, provider: TranslationProvider) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn provider_mut(&mut self) -> &mut TranslationProvider {
        &mut self.provider
    }

    fn is_candidate(&self, word: &str) -> bool {
        word.chars().count() >= self.config.min_word_length && is_non_english_text(word)
    }

    /// A lone configured source language is passed through; otherwise detect
    fn source_hint(&self) -> String {
        match self.config.source_languages.as_slice() {
            [only] => only.clone(),
            _ => TranslationRecord::AUTO_LANGUAGE.to_string(),
        }
    }

    fn accepts_source(&self, detected: &str) -> bool {
        let sources = &self.config.source_languages;
        sources.is_empty()
            || sources
                .iter()
                .any(|s| s == TranslationRecord::AUTO_LANGUAGE || s == detected)
    }

    async fn lookup(&mut self, word: &str) -> Option<TranslationResult> {
        let target = self.config.target_language.clone();
        let source = self.source_hint();
        let result = self.provider.translate(word, &target, &source).await?;
        if result.confidence < self.config.min_confidence || !result.changes_text() {
            debug!(word, confidence = result.confidence, "no useful inline translation");
            return None;
        }
        if !self.accepts_source(&result.source_language) {
            debug!(word, source = %result.source_language, "word not in a configured source language");
            return None;
        }
        Some(result)
    }

    pub async fn hover(&mut self, line: &str, column: usize, language_id: &str) -> Option<HoverInfo> {
        if !self.config.enabled {
            return None;
        }

        let context = CodeContext::detect(line, column, language_id);
        if !context.allowed_by(&self.config) {
            return None;
        }

        let word = word_at(line, column)?;
        if !self.is_candidate(word) {
            return None;
        }

        let result = self.lookup(word).await?;
        Some(HoverInfo {
            word: word.to_string(),
            confidence_percent: result.confidence_percent(),
            translated_text: result.translated_text,
            source_language: result.source_language,
            target_language: result.target_language,
            context: context.label(),
        })
    }

    /// Suggest a translation for the last token of `line_prefix`
    pub async fn complete(&mut self, line_prefix: &str) -> Option<CompletionSuggestion> {
        if !self.config.enabled {
            return None;
        }

        let partial = line_prefix
            .rsplit(char::is_whitespace)
            .next()
            .filter(|token| !token.is_empty())?;
        if !self.is_candidate(partial) {
            return None;
        }

        let result = self.lookup(partial).await?;
        Some(CompletionSuggestion {
            label: result.translated_text.clone(),
            insert_text: result.translated_text.clone(),
            filter_text: partial.to_string(),
            detail: format!("Translation of \"{}\"", result.original_text),
            documentation: format!(
                "**Original:** {}\n\n**Translation:** {}\n\n**Language:** {} → {}\n\n**Confidence:** {}%",
                result.original_text,
                result.translated_text,
                result.source_language,
                result.target_language,
                result.confidence_percent()
            ),
        })
    }
}
