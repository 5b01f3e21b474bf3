//! UI string extraction and translation
//!
//! `UiTranslationManager` owns the whole pipeline state: the term matcher,
//! the extraction cache keyed by `(file path, content hash)`, the cached
//! translation provider and the translation store. The composing
//! application constructs one and passes it by reference to its consumers.

use crate::error::TranslatorResult;
use crate::extract::{TermMatcher, content_hash};
use crate::lookup::{CacheStats, FifoCache, TranslationProvider};
use crate::model::{Framework, TranslationRecord};
use crate::store::TranslationStore;
use tracing::{debug, info};

/// Extraction cache key
type ExtractionKey = (String, String);

pub struct UiTranslationManager {
    matcher: TermMatcher,
    extraction_cache: FifoCache<ExtractionKey, Vec<TranslationRecord>>,
    provider: TranslationProvider,
    store: TranslationStore,
    min_confidence: f64,
}

impl Default for UiTranslationManager {
    fn default() -> Self {
        Self::new(TranslationProvider::dictionary())
    }
}

impl UiTranslationManager {
    pub const DEFAULT_EXTRACTION_CACHE_CAPACITY: usize = 1000;
    pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

    pub fn new(provider: TranslationProvider) -> Self {
        Self {
            matcher: TermMatcher::new(),
            extraction_cache: FifoCache::new(Self::DEFAULT_EXTRACTION_CACHE_CAPACITY),
            provider,
            store: TranslationStore::new(),
            min_confidence: Self::DEFAULT_MIN_CONFIDENCE,
        }
    }

    pub fn with_matcher(mut self, matcher: TermMatcher) -> Self {
        self.matcher = matcher;
        self.extraction_cache.clear();
        self
    }

    pub fn with_extraction_cache_capacity(mut self, capacity: usize) -> Self {
        self.extraction_cache = FifoCache::new(capacity);
        self
    }

    /// Translations must score strictly above this to be accepted
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Extract UI terms, reusing the cached result for unchanged content
    pub fn extract_ui_terms(&mut self, content: &str, file_path: &str) -> Vec<TranslationRecord> {
        self.extract_with(content, file_path, |matcher| matcher.extract(content, file_path))
    }

    /// Like [`Self::extract_ui_terms`] with the framework already decided
    pub fn extract_ui_terms_for(
        &mut self,
        content: &str,
        file_path: &str,
        framework: Framework,
    ) -> Vec<TranslationRecord> {
        self.extract_with(content, file_path, |matcher| {
            matcher.extract_for(content, file_path, framework)
        })
    }

    fn extract_with<F>(&mut self, content: &str, file_path: &str, run: F) -> Vec<TranslationRecord>
    where
        F: FnOnce(&TermMatcher) -> Vec<TranslationRecord>,
    {
        let key = (file_path.to_string(), content_hash(content));
        if let Some(cached) = self.extraction_cache.get(&key) {
            debug!(file_path, terms = cached.len(), "extraction cache hit");
            return cached;
        }

        let terms = run(&self.matcher);
        debug!(file_path, terms = terms.len(), "extracted UI terms");
        self.extraction_cache.put(key, terms.clone());
        terms
    }

    /// Translate terms and store the ones that pass the confidence gate
    ///
    /// Lookup failures and low-confidence results are skipped. Returns the
    /// accepted records in input order.
    pub async fn translate_ui_terms(
        &mut self,
        terms: &[TranslationRecord],
        target_language: &str,
    ) -> Vec<TranslationRecord> {
        let mut translated = Vec::new();

        for term in terms {
            if let Some(reviewed) = self.reviewed_translation(term, target_language) {
                debug!(key = %term.key, "keeping imported translation");
                translated.push(reviewed);
                continue;
            }

            let Some(result) = self
                .provider
                .translate(&term.original_text, target_language, "auto")
                .await
            else {
                continue;
            };

            if result.confidence <= self.min_confidence {
                debug!(
                    text = %term.original_text,
                    confidence = result.confidence,
                    "translation below confidence threshold"
                );
                continue;
            }

            let record = term.with_translation(&result);
            self.store.upsert(record.clone());
            translated.push(record);
        }

        info!(
            requested = terms.len(),
            accepted = translated.len(),
            target_language,
            "translated UI terms"
        );
        translated
    }

    /// An imported record for the same text and language wins over a fresh lookup
    fn reviewed_translation(
        &self,
        term: &TranslationRecord,
        target_language: &str,
    ) -> Option<TranslationRecord> {
        if !self.store.is_imported(&term.key) {
            return None;
        }
        self.store
            .get(&term.key)
            .filter(|r| r.original_text == term.original_text && r.language == target_language)
            .cloned()
    }

    pub fn get_translation(&self, key: &str) -> Option<&TranslationRecord> {
        self.store.get(key)
    }

    pub fn get_all_translations(&self) -> Vec<&TranslationRecord> {
        self.store.get_all()
    }

    pub fn recent_translations(&self, limit: usize) -> Vec<&TranslationRecord> {
        self.store.recent(limit)
    }

    /// Button, label, placeholder and tooltip records
    pub fn ui_element_translations(&self) -> Vec<&TranslationRecord> {
        let mut records: Vec<&TranslationRecord> = self
            .store
            .get_all()
            .into_iter()
            .filter(|r| r.context.element_type.is_form_element())
            .collect();
        records.sort_by(|a, b| a.key.cmp(&b.key));
        records
    }

    /// Drop memoized extractions and lookups; stored translations stay
    pub fn clear_cache(&mut self) {
        self.extraction_cache.clear();
        self.provider.clear_cache();
    }

    pub fn export_translations(&self) -> TranslatorResult<String> {
        self.store.export_all()
    }

    pub fn import_translations(&mut self, json: &str) -> TranslatorResult<usize> {
        self.store.import_all(json)
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TranslationStore {
        &mut self.store
    }

    pub fn provider_mut(&mut self) -> &mut TranslationProvider {
        &mut self.provider
    }

    pub fn extraction_cache_stats(&self) -> CacheStats {
        self.extraction_cache.stats()
    }

    pub fn extraction_cache_len(&self) -> usize {
        self.extraction_cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::mock::{MockMode, MockTranslator, hit_mappings};
    use crate::model::ElementType;
    use std::sync::Arc;

    #[test]
    fn test_second_extraction_hits_cache() {
        let mut manager = UiTranslationManager::default();
        let content = "<button>Guardar</button><label>Naam</label>";

        let first = manager.extract_ui_terms(content, "src/App.jsx");
        let second = manager.extract_ui_terms(content, "src/App.jsx");

        assert_eq!(first, second);
        let stats = manager.extraction_cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_changed_content_misses_cache() {
        let mut manager = UiTranslationManager::default();
        manager.extract_ui_terms("<button>Guardar</button>", "App.jsx");
        let terms = manager.extract_ui_terms("<button>Cancelar</button>", "App.jsx");
        assert_eq!(terms[0].original_text, "Cancelar");
        assert_eq!(manager.extraction_cache_stats().misses, 2);
        assert_eq!(manager.extraction_cache_len(), 2);
    }

    #[test]
    fn test_extraction_cache_is_bounded() {
        let mut manager = UiTranslationManager::default().with_extraction_cache_capacity(2);
        for i in 0..5 {
            manager.extract_ui_terms(&format!("<button>Guardar {}</button>", i), "App.jsx");
        }
        assert_eq!(manager.extraction_cache_len(), 2);
    }

    #[tokio::test]
    async fn test_guardar_scenario() {
        let mut manager = UiTranslationManager::default();
        let terms = manager.extract_ui_terms("<button>Guardar</button>", "App.jsx");
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].original_text, "Guardar");
        assert_eq!(terms[0].context.element_type, ElementType::Button);

        let translated = manager.translate_ui_terms(&terms, "en").await;
        assert_eq!(translated.len(), 1);
        assert_eq!(translated[0].translated_text, "save");
        assert_eq!(translated[0].confidence, 0.9);
        assert_eq!(translated[0].language, "en");

        let stored = manager.get_translation("App_button_guardar").unwrap();
        assert_eq!(stored.translated_text, "save");
    }

    #[tokio::test]
    async fn test_low_confidence_results_are_not_stored() {
        let mut manager = UiTranslationManager::default();
        // Accented, so it passes the filter, but the dictionary has no entry
        let terms = manager.extract_ui_terms("<button>Añadir</button>", "App.jsx");
        assert_eq!(terms.len(), 1);

        let translated = manager.translate_ui_terms(&terms, "en").await;
        assert!(translated.is_empty());
        assert!(manager.store().is_empty());
    }

    #[tokio::test]
    async fn test_threshold_is_exclusive() {
        let mut map = std::collections::HashMap::new();
        map.insert(("guardar".to_string(), "en".to_string()), ("save".to_string(), 0.5));
        let provider = TranslationProvider::new(Box::new(MockTranslator::new(MockMode::Mappings(map))));
        let mut manager = UiTranslationManager::new(provider);

        let terms = manager.extract_ui_terms("<button>Guardar</button>", "App.jsx");
        assert!(manager.translate_ui_terms(&terms, "en").await.is_empty());

        let mut manager = UiTranslationManager::new(TranslationProvider::dictionary())
            .with_min_confidence(0.95);
        let terms = manager.extract_ui_terms("<button>Guardar</button>", "App.jsx");
        assert!(manager.translate_ui_terms(&terms, "en").await.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_skips_term() {
        let provider = TranslationProvider::new(Box::new(MockTranslator::new(MockMode::Error(
            "network down".to_string(),
        ))));
        let mut manager = UiTranslationManager::new(provider);
        let terms = manager.extract_ui_terms("<button>Guardar</button>", "App.jsx");
        assert!(manager.translate_ui_terms(&terms, "en").await.is_empty());
        assert!(manager.store().is_empty());
    }

    #[tokio::test]
    async fn test_clear_cache_keeps_store() {
        let mock = Arc::new(MockTranslator::new(hit_mappings(&[("opslaan", "en", "save")])));
        let mut manager = UiTranslationManager::new(TranslationProvider::new(Box::new(mock.clone())));

        let terms = manager.extract_ui_terms("<button>Opslaan</button>", "Bar.tsx");
        manager.translate_ui_terms(&terms, "en").await;
        manager.translate_ui_terms(&terms, "en").await;
        assert_eq!(mock.calls(), 1);

        manager.clear_cache();
        manager.translate_ui_terms(&terms, "en").await;
        assert_eq!(mock.calls(), 2);
        assert_eq!(manager.extraction_cache_len(), 0);
        assert_eq!(manager.get_all_translations().len(), 1);
    }

    #[tokio::test]
    async fn test_export_import_through_manager() {
        let mut manager = UiTranslationManager::default();
        let terms = manager.extract_ui_terms(
            r#"<button>Guardar</button><input placeholder="Wachtwoord">"#,
            "Login.jsx",
        );
        manager.translate_ui_terms(&terms, "en").await;
        let exported = manager.export_translations().unwrap();

        let mut restored = UiTranslationManager::default();
        assert_eq!(restored.import_translations(&exported).unwrap(), 2);
        assert_eq!(
            restored.get_translation("Login_placeholder_wachtwoord").unwrap().translated_text,
            "password"
        );
        assert_eq!(restored.ui_element_translations().len(), 2);
        assert!(restored.import_translations("not json").is_err());
        assert_eq!(restored.store().len(), 2);
    }

    #[tokio::test]
    async fn test_imported_translation_survives_reanalysis() {
        let mock = Arc::new(MockTranslator::new(hit_mappings(&[
            ("opslaan", "en", "save"),
            ("opslaan", "fr", "enregistrer"),
        ])));
        let mut manager = UiTranslationManager::new(TranslationProvider::new(Box::new(mock.clone())));
        let terms = manager.extract_ui_terms("<button>Opslaan</button>", "Bar.tsx");

        let mut reviewed = terms[0].clone();
        reviewed.translated_text = "Save changes".to_string();
        reviewed.language = "en".to_string();
        reviewed.confidence = 1.0;
        manager
            .import_translations(&serde_json::to_string(&vec![reviewed]).unwrap())
            .unwrap();

        let translated = manager.translate_ui_terms(&terms, "en").await;
        assert_eq!(translated[0].translated_text, "Save changes");
        assert_eq!(mock.calls(), 0);

        // Another target language is a fresh lookup and replaces the record
        let translated = manager.translate_ui_terms(&terms, "fr").await;
        assert_eq!(translated[0].translated_text, "enregistrer");
        assert_eq!(mock.calls(), 1);
        assert!(!manager.store().is_imported(&terms[0].key));
    }
}
