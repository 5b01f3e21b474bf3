//! Core data structures shared by extraction, lookup and persistence
//!
//! Field names serialize in camelCase so exported documents keep the
//! `originalText` / `translatedText` / `lastUpdated` shape that reviewers and
//! localization tooling expect.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of UI element a term was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Button,
    Label,
    Placeholder,
    Tooltip,
    Menu,
    Dialog,
    Notification,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Button => "button",
            ElementType::Label => "label",
            ElementType::Placeholder => "placeholder",
            ElementType::Tooltip => "tooltip",
            ElementType::Menu => "menu",
            ElementType::Dialog => "dialog",
            ElementType::Notification => "notification",
        }
    }

    /// Elements shown in the "UI Elements" review grouping
    pub fn is_form_element(&self) -> bool {
        matches!(
            self,
            ElementType::Button | ElementType::Label | ElementType::Placeholder | ElementType::Tooltip
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI framework a file is written for, used to select extraction rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Angular,
    Html,
    Jsx,
    Tsx,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
            Framework::Html => "html",
            Framework::Jsx => "jsx",
            Framework::Tsx => "tsx",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "react" => Some(Framework::React),
            "vue" => Some(Framework::Vue),
            "angular" => Some(Framework::Angular),
            "html" => Some(Framework::Html),
            "jsx" => Some(Framework::Jsx),
            "tsx" => Some(Framework::Tsx),
            _ => None,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the source a term was found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiContext {
    pub element_type: ElementType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<Framework>,
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_element: Option<String>,
}

/// A UI string and its best-known translation
///
/// Records are created by extraction with `confidence == 0.0` and
/// `language == "auto"`, then updated in place once a lookup is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub key: String,
    pub original_text: String,
    pub translated_text: String,
    pub context: UiContext,
    pub language: String,
    pub confidence: f64,
    pub last_updated: DateTime<Utc>,
}

impl TranslationRecord {
    /// Language marker for records that have not been translated yet
    pub const AUTO_LANGUAGE: &'static str = "auto";

    /// Create an untranslated record: translated text echoes the original
    pub fn extracted(key: String, text: String, context: UiContext) -> Self {
        Self {
            key,
            translated_text: text.clone(),
            original_text: text,
            context,
            language: Self::AUTO_LANGUAGE.to_string(),
            confidence: 0.0,
            last_updated: Utc::now(),
        }
    }

    /// Copy of this record carrying the outcome of a lookup
    ///
    /// An empty translation never replaces a non-empty original.
    pub fn with_translation(&self, result: &TranslationResult) -> Self {
        let translated_text = if result.translated_text.is_empty() {
            self.original_text.clone()
        } else {
            result.translated_text.clone()
        };
        Self {
            translated_text,
            language: result.target_language.clone(),
            confidence: result.confidence,
            last_updated: Utc::now(),
            ..self.clone()
        }
    }

    pub fn is_translated(&self) -> bool {
        self.language != Self::AUTO_LANGUAGE && self.confidence > 0.0
    }

    /// Check invariants that deserialization alone cannot enforce
    pub fn validate(&self) -> Result<(), String> {
        if self.key.is_empty() {
            return Err("record with empty key".to_string());
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!(
                "record '{}': confidence {} is outside [0, 1]",
                self.key, self.confidence
            ));
        }
        if self.translated_text.is_empty() && !self.original_text.is_empty() {
            return Err(format!("record '{}': translatedText is empty", self.key));
        }
        Ok(())
    }
}

/// Outcome of a single lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub confidence: f64,
}

impl TranslationResult {
    /// Whether the translation differs from its input, ignoring case
    pub fn changes_text(&self) -> bool {
        self.original_text.to_lowercase() != self.translated_text.to_lowercase()
    }

    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}
