//! Cached translation lookups
//!
//! `TranslationProvider` puts the bounded lookup cache in front of a
//! `TermTranslator`. Backend failures never reach the caller: they are
//! logged and reported as "no translation available".

use crate::lookup::cache::{CacheStats, FifoCache};
use crate::lookup::dictionary::DictionaryTranslator;
use crate::lookup::translator::TermTranslator;
use crate::model::TranslationResult;
use tracing::{debug, warn};

/// Cache key for a lookup: the same text can translate differently per pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    pub text: String,
    pub source_locale: String,
    pub target_locale: String,
}

impl LookupKey {
    pub fn new(text: &str, source_locale: &str, target_locale: &str) -> Self {
        Self {
            text: text.to_string(),
            source_locale: source_locale.to_string(),
            target_locale: target_locale.to_string(),
        }
    }
}

pub struct TranslationProvider {
    backend: Box<dyn TermTranslator>,
    cache: FifoCache<LookupKey, TranslationResult>,
}

impl TranslationProvider {
    pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

    pub fn new(backend: Box<dyn TermTranslator>) -> Self {
        Self::with_capacity(backend, Self::DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(backend: Box<dyn TermTranslator>, capacity: usize) -> Self {
        Self {
            backend,
            cache: FifoCache::new(capacity),
        }
    }

    /// Provider backed by the built-in dictionary
    pub fn dictionary() -> Self {
        Self::new(Box::new(DictionaryTranslator::new()))
    }

    /// Translate `text`, consulting the cache first
    ///
    /// Returns `None` when the backend fails; failures are not cached, so a
    /// later call retries the backend.
    pub async fn translate(
        &mut self,
        text: &str,
        target_locale: &str,
        source_locale: &str,
    ) -> Option<TranslationResult> {
        let key = LookupKey::new(text, source_locale, target_locale);
        if let Some(cached) = self.cache.get(&key) {
            debug!(text, target_locale, "lookup cache hit");
            return Some(cached);
        }

        match self
            .backend
            .translate(text, target_locale, source_locale)
            .await
        {
            Ok(result) => {
                if let Some(evicted) = self.cache.put(key, result.clone()) {
                    debug!(evicted = %evicted.text, "lookup cache full, evicted oldest entry");
                }
                Some(result)
            }
            Err(err) => {
                warn!(
                    provider = self.backend.provider_name(),
                    text,
                    error = %err,
                    "translation lookup failed"
                );
                None
            }
        }
    }

    pub fn provider_name(&self) -> &str {
        self.backend.provider_name()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Default for TranslationProvider {
    fn default() -> Self {
        Self::dictionary()
    }
}
