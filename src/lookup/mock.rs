//! Mock translation backend for testing
//!
//! A deterministic backend that can also fail on demand, so the degrade-to-
//! `None` paths can be exercised without a real service.
//!
//! # Example
//!
//! ```ignore
//! use code_translator::lookup::{MockMode, MockTranslator, TermTranslator};
//!
//! #[tokio::test]
//! async fn test_offline_backend() {
//!     let mock = MockTranslator::new(MockMode::Error("offline".into()));
//!     assert!(mock.translate("hola", "en", "auto").await.is_err());
//! }
//! ```

use crate::error::{TranslatorError, TranslatorResult};
use crate::lookup::dictionary::{DictionaryTranslator, HIT_CONFIDENCE, MISS_CONFIDENCE};
use crate::lookup::translator::TermTranslator;
use crate::model::TranslationResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Answer from the built-in dictionary
    Dictionary,

    /// Use predefined mappings: (lowercased text, target_locale) → (translation, confidence)
    Mappings(HashMap<(String, String), (String, f64)>),

    /// Simulate backend errors
    Error(String),

    /// Echo the input with miss confidence
    NoOp,
}

/// Mock backend that records how often it is called
#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated latency (in milliseconds)
    delay_ms: u64,
    calls: AtomicUsize,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `translate` calls that reached this backend
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(
        &self,
        text: &str,
        target: &str,
        source: &str,
    ) -> TranslatorResult<TranslationResult> {
        match &self.mode {
            MockMode::Dictionary => Ok(DictionaryTranslator::new().lookup(text, target, source)),
            MockMode::Mappings(map) => {
                let key = (text.to_lowercase(), target.to_string());
                let (translated_text, confidence) = map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| (text.to_string(), MISS_CONFIDENCE));
                Ok(TranslationResult {
                    original_text: text.to_string(),
                    translated_text,
                    source_language: source.to_string(),
                    target_language: target.to_string(),
                    confidence,
                })
            }
            MockMode::Error(msg) => Err(TranslatorError::Lookup(msg.clone())),
            MockMode::NoOp => Ok(TranslationResult {
                original_text: text.to_string(),
                translated_text: text.to_string(),
                source_language: source.to_string(),
                target_language: target.to_string(),
                confidence: MISS_CONFIDENCE,
            }),
        }
    }
}

/// Build a `Mappings` mode where every entry is a dictionary-style hit
pub fn hit_mappings(entries: &[(&str, &str, &str)]) -> MockMode {
    let map = entries
        .iter()
        .map(|(text, target, translated)| {
            (
                (text.to_lowercase(), target.to_string()),
                (translated.to_string(), HIT_CONFIDENCE),
            )
        })
        .collect();
    MockMode::Mappings(map)
}

#[async_trait]
impl TermTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        target_locale: &str,
        source_locale: &str,
    ) -> TranslatorResult<TranslationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;
        self.apply_translation(text, target_locale, source_locale)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dictionary_mode() {
        let mock = MockTranslator::new(MockMode::Dictionary);
        let result = mock.translate("hallo", "en", "auto").await.unwrap();
        assert_eq!(result.translated_text, "hello");
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_mappings_mode() {
        let mock = MockTranslator::new(hit_mappings(&[("Speichern", "en", "save")]));
        let result = mock.translate("speichern", "en", "de").await.unwrap();
        assert_eq!(result.translated_text, "save");
        assert_eq!(result.confidence, HIT_CONFIDENCE);

        let miss = mock.translate("Abbrechen", "en", "de").await.unwrap();
        assert_eq!(miss.translated_text, "Abbrechen");
        assert_eq!(miss.confidence, MISS_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_error_mode() {
        let mock = MockTranslator::new(MockMode::Error("quota exceeded".to_string()));
        match mock.translate("hola", "en", "auto").await {
            Err(TranslatorError::Lookup(msg)) => assert_eq!(msg, "quota exceeded"),
            other => panic!("Expected lookup error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_noop_mode() {
        let mock = MockTranslator::new(MockMode::NoOp);
        let result = mock.translate("hola", "en", "auto").await.unwrap();
        assert_eq!(result.translated_text, "hola");
        assert_eq!(mock.provider_name(), "Mock Translator");
    }

    #[tokio::test]
    async fn test_delay_mode() {
        let mock = MockTranslator::with_delay(MockMode::NoOp, 5);
        let start = std::time::Instant::now();
        mock.translate("hola", "en", "auto").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
