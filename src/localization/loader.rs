//! Reading generated locale files back
//!
//! Mirrors the lookup behaviour of the generated `index.js` so locale files
//! can be checked or merged from Rust.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::{TranslatorError, TranslatorResult};
use crate::lookup::normalize_locale;
use serde_json::Value;
use tracing::warn;

/// Messages for a single language: key → translated text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalizedMessages(pub HashMap<String, String>);

impl LocalizedMessages {
    pub fn new() -> Self {
        LocalizedMessages(HashMap::new())
    }
    pub fn with_message(&mut self, key: &str, message: &str) -> &mut Self {
        self.0.insert(key.to_owned(), message.to_owned());
        self
    }
    pub fn get_message(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }
    pub fn get_messages(&self) -> &HashMap<String, String> {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// All languages found in a `locales/` directory
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    messages: BTreeMap<String, LocalizedMessages>,
}

impl LocaleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages_for_locale(&mut self, locale: &str, messages: LocalizedMessages) -> &mut Self {
        self.messages.insert(normalize_locale(locale), messages);
        self
    }

    /// Translated text for `key`, or the key itself when absent
    pub fn get_translation(&self, key: &str, language: &str) -> String {
        self.messages
            .get(&normalize_locale(language))
            .and_then(|messages| messages.get_message(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Every message for `language`; empty when the language is unknown
    pub fn get_all_translations(&self, language: &str) -> HashMap<String, String> {
        self.messages
            .get(&normalize_locale(language))
            .map(|messages| messages.get_messages().clone())
            .unwrap_or_default()
    }

    pub fn supported_languages(&self) -> Vec<&str> {
        self.messages.keys().map(String::as_str).collect()
    }
}

/// Load messages from a single JSON file
///
/// The root must be an object. Keys starting with `@` are metadata and are
/// skipped, as are non-string values.
pub fn load_locale_file(path: &Path) -> TranslatorResult<LocalizedMessages> {
    let content = fs::read_to_string(path).map_err(|e| TranslatorError::io(path, e))?;

    let json: Value = serde_json::from_str(&content).map_err(|e| {
        TranslatorError::ImportParse(format!("Failed to parse JSON from '{}': {}", path.display(), e))
    })?;

    let obj = json.as_object().ok_or_else(|| {
        TranslatorError::ImportParse(format!(
            "Invalid JSON in '{}': root must be an object",
            path.display()
        ))
    })?;

    let mut messages = LocalizedMessages::new();
    for (key, value) in obj {
        if key.starts_with('@') {
            continue;
        }

        if let Some(message) = value.as_str() {
            messages.with_message(key, message);
        } else {
            warn!(key = %key, path = %path.display(), "message is not a string, skipping");
        }
    }

    Ok(messages)
}

/// Load every `*.json` file of a directory; the file stem is the language
pub fn load_locales_dir(dir: &Path) -> TranslatorResult<LocaleCatalog> {
    let not_found = || std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory");
    if !dir.is_dir() {
        return Err(TranslatorError::io(dir, not_found()));
    }

    let mut catalog = LocaleCatalog::new();
    let entries = fs::read_dir(dir).map_err(|e| TranslatorError::io(dir, e))?;

    for entry in entries {
        let path = entry.map_err(|e| TranslatorError::io(dir, e))?.path();

        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        let locale = locale.to_string();

        let messages = load_locale_file(&path)?;
        catalog.with_messages_for_locale(&locale, messages);
    }

    if catalog.messages.is_empty() {
        warn!(dir = %dir.display(), "no locale files found");
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_fallbacks() {
        let mut en = LocalizedMessages::new();
        en.with_message("App_button_guardar", "save");
        let mut catalog = LocaleCatalog::new();
        catalog.with_messages_for_locale("EN", en);

        assert_eq!(catalog.get_translation("App_button_guardar", "en"), "save");
        assert_eq!(catalog.get_translation("missing_key", "en"), "missing_key");
        assert_eq!(catalog.get_translation("App_button_guardar", "fr"), "App_button_guardar");
        assert!(catalog.get_all_translations("fr").is_empty());
        assert_eq!(catalog.get_all_translations("en").len(), 1);
        assert_eq!(catalog.supported_languages(), vec!["en"]);
    }

    #[test]
    fn test_lookup_language_is_normalized() {
        let mut pt = LocalizedMessages::new();
        pt.with_message("App_button_guardar", "salvar");
        let mut catalog = LocaleCatalog::new();
        catalog.with_messages_for_locale("pt-br", pt);

        assert_eq!(catalog.get_translation("App_button_guardar", "PT_BR"), "salvar");
        assert_eq!(catalog.get_translation("App_button_guardar", " pt-BR "), "salvar");
        assert_eq!(catalog.get_all_translations("PT-BR").len(), 1);
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("nl.json"),
            r#"{"@metadata": {"authors": []}, "a_label_name": "naam", "count": 3}"#,
        )
        .unwrap();
        fs::write(dir.path().join("index.js"), "// ignored").unwrap();

        let catalog = load_locales_dir(dir.path()).unwrap();
        assert_eq!(catalog.supported_languages(), vec!["nl"]);
        assert_eq!(catalog.get_translation("a_label_name", "nl"), "naam");
        assert_eq!(catalog.get_all_translations("nl").len(), 1);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_locales_dir(&dir.path().join("nope")).is_err());

        let bad = dir.path().join("en.json");
        fs::write(&bad, "[1, 2]").unwrap();
        assert!(matches!(load_locale_file(&bad), Err(TranslatorError::ImportParse(_))));
    }
}
