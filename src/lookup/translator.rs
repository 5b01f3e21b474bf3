//! Translation backend trait and locale utilities
//!
//! `TermTranslator` abstracts over the thing that actually turns a word into
//! another language: the built-in dictionary, a mock for tests, or a network
//! service. Backends may fail; callers decide how to degrade.

use crate::error::{TranslatorError, TranslatorResult};
use crate::model::TranslationResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Generic trait for translation backends
///
/// All methods are async so that I/O-bound backends fit behind the same seam
/// as the static table.
#[async_trait]
pub trait TermTranslator: Send + Sync {
    /// Translate a single word or phrase
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `target_locale` - Target language code (e.g., "en", "nl")
    /// * `source_locale` - Source language code, or "auto" to infer it
    ///
    /// # Returns
    ///
    /// * `Ok(TranslationResult)` - The lookup outcome, including confidence
    /// * `Err(TranslatorError::Lookup)` - If the backend is unavailable
    async fn translate(
        &self,
        text: &str,
        target_locale: &str,
        source_locale: &str,
    ) -> TranslatorResult<TranslationResult>;

    /// Name used in logs to identify which backend handled a lookup
    fn provider_name(&self) -> &str;
}

/// Shared backends: lets callers keep a handle on a backend they hand over
#[async_trait]
impl<T: TermTranslator + ?Sized> TermTranslator for Arc<T> {
    async fn translate(
        &self,
        text: &str,
        target_locale: &str,
        source_locale: &str,
    ) -> TranslatorResult<TranslationResult> {
        (**self).translate(text, target_locale, source_locale).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}

/// Normalize a locale code for use as a lookup and file name key
///
/// - `EN` → `en`
/// - `zh_CN` → `zh-cn`
/// - ` nl ` → `nl`
pub fn normalize_locale(locale: &str) -> String {
    locale.trim().replace('_', "-").to_lowercase()
}

/// Base language of a locale code: `fr-CA` → `fr`
pub fn base_language(locale: &str) -> String {
    let normalized = normalize_locale(locale);
    normalized
        .split('-')
        .next()
        .unwrap_or(normalized.as_str())
        .to_string()
}

/// Validate that a locale code is in acceptable format
///
/// Locale codes end up as file names under `locales/`, so only ASCII
/// alphanumerics, hyphens and underscores are allowed.
pub fn validate_locale(locale: &str) -> TranslatorResult<()> {
    if locale.trim().is_empty() {
        return Err(TranslatorError::InvalidLocale(
            "Locale code is empty".to_string(),
        ));
    }

    if !locale
        .trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TranslatorError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("EN"), "en");
        assert_eq!(normalize_locale("zh_CN"), "zh-cn");
        assert_eq!(normalize_locale(" nl "), "nl");
    }

    #[test]
    fn test_base_language() {
        assert_eq!(base_language("fr-CA"), "fr");
        assert_eq!(base_language("zh_Hans"), "zh");
        assert_eq!(base_language("de"), "de");
    }

    #[test]
    fn test_validate_locale_valid_codes() {
        assert!(validate_locale("en").is_ok());
        assert!(validate_locale("zh-cn").is_ok());
        assert!(validate_locale("pt_BR").is_ok());
    }

    #[test]
    fn test_validate_locale_invalid_codes() {
        assert!(validate_locale("").is_err());
        assert!(validate_locale("../en").is_err());
        assert!(validate_locale("fr#bad").is_err());
    }

    #[test]
    fn test_validate_locale_error_messages() {
        match validate_locale("en/US") {
            Err(TranslatorError::InvalidLocale(msg)) => {
                assert!(msg.contains("Invalid characters"));
            }
            _ => panic!("Expected InvalidLocale error"),
        }
    }
}
