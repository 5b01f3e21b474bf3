//! Locale file generation
//!
//! Writes `locales/<language>.json` (flat key → translated text) for every
//! language present in the records, plus a generated `locales/index.js`
//! lookup module.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TranslatorError, TranslatorResult};
use crate::lookup::validate_locale;
use crate::model::TranslationRecord;
use tracing::{debug, info, warn};

/// language → key → translated text
pub type GroupedTranslations = BTreeMap<String, BTreeMap<String, String>>;

/// Group records by language, then by key; later records win on equal keys
pub fn group_translations<'a, I>(records: I) -> GroupedTranslations
where
    I: IntoIterator<Item = &'a TranslationRecord>,
{
    let mut grouped = GroupedTranslations::new();
    for record in records {
        grouped
            .entry(record.language.clone())
            .or_default()
            .insert(record.key.clone(), record.translated_text.clone());
    }
    grouped
}

/// Source of the generated `index.js` lookup module
pub fn generate_index(languages: &[&str]) -> String {
    let requires = languages
        .iter()
        .map(|lang| format!("  '{}': require('./{}.json')", lang, lang))
        .collect::<Vec<_>>()
        .join(",\n");
    let supported = languages
        .iter()
        .map(|lang| format!("'{}'", lang))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"// Auto-generated localization index
const translations = {{
{requires}
}};

function getTranslation(key, language = 'en') {{
  return translations[language]?.[key] || key;
}}

function getAllTranslations(language = 'en') {{
  return translations[language] || {{}};
}}

module.exports = {{
  translations,
  getTranslation,
  getAllTranslations,
  supportedLanguages: [{supported}]
}};
"#
    )
}

#[derive(Debug, Clone)]
pub struct LocalizationFileWriter {
    locales_dir: PathBuf,
}

impl LocalizationFileWriter {
    pub const INDEX_FILE: &'static str = "index.js";

    /// Writer targeting `<workspace>/locales`
    pub fn new(workspace: &Path) -> Self {
        Self {
            locales_dir: workspace.join("locales"),
        }
    }

    pub fn locales_dir(&self) -> &Path {
        &self.locales_dir
    }

    /// Write one JSON file per language and the index; returns written paths
    ///
    /// Languages whose code is not a safe file name are skipped.
    pub fn write(&self, grouped: &GroupedTranslations) -> TranslatorResult<Vec<PathBuf>> {
        if let Err(e) = fs::create_dir_all(&self.locales_dir) {
            // Treated as "already exists"; a real problem surfaces on write
            debug!(dir = %self.locales_dir.display(), error = %e, "could not create locales directory");
        }

        let mut written = Vec::new();
        let mut languages = Vec::new();

        for (language, translations) in grouped {
            if let Err(e) = validate_locale(language) {
                warn!(language = %language, error = %e, "skipping language with unsafe code");
                continue;
            }

            let path = self.locales_dir.join(format!("{}.json", language));
            let content = serde_json::to_string_pretty(translations)?;
            fs::write(&path, content).map_err(|e| TranslatorError::io(&path, e))?;
            debug!(path = %path.display(), entries = translations.len(), "wrote locale file");

            languages.push(language.as_str());
            written.push(path);
        }

        let index_path = self.locales_dir.join(Self::INDEX_FILE);
        fs::write(&index_path, generate_index(&languages))
            .map_err(|e| TranslatorError::io(&index_path, e))?;
        written.push(index_path);

        info!(
            dir = %self.locales_dir.display(),
            languages = languages.len(),
            "generated localization files"
        );
        Ok(written)
    }
}
