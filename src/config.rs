//! Configuration for inline translation and UI localization
//!
//! Every field has a default, so an empty or partial TOML file is valid:
//!
//! ```toml
//! [general]
//! target_language = "en"
//! min_word_length = 3
//!
//! [ui]
//! exclude_patterns = ["node_modules", "dist", "build", "vendor"]
//! ```

use std::fs;
use std::path::Path;

use crate::error::{TranslatorError, TranslatorResult};
use crate::lookup::{normalize_locale, validate_locale};
use crate::model::{Framework, TranslationRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: TranslatorConfig,
    pub ui: LocalizationConfig,
}

/// Settings for hover and completion translations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub enabled: bool,
    /// Languages hovered words are expected in; `auto` detects per word
    pub source_languages: Vec<String>,
    pub target_language: String,
    pub translate_comments: bool,
    pub translate_strings: bool,
    pub translate_identifiers: bool,
    pub min_word_length: usize,
    /// Lookups below this confidence are not shown
    pub min_confidence: f64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            source_languages: vec!["auto".to_string()],
            target_language: "en".to_string(),
            translate_comments: true,
            translate_strings: true,
            translate_identifiers: false,
            min_word_length: 3,
            min_confidence: 0.5,
        }
    }
}

/// Settings for UI string extraction and locale file generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    pub enabled: bool,
    pub auto_detect: bool,
    pub target_language: String,
    pub supported_frameworks: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub include_file_types: Vec<String>,
    /// Translations must exceed this confidence to be stored
    pub min_confidence: f64,
    /// Stored translations above this confidence produce hints
    pub hint_confidence: f64,
    pub extraction_cache_capacity: usize,
    pub lookup_cache_capacity: usize,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_detect: true,
            target_language: "en".to_string(),
            supported_frameworks: ["react", "vue", "angular", "html"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude_patterns: ["node_modules", "dist", "build"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            include_file_types: ["jsx", "tsx", "vue", "html", "js", "ts"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_confidence: 0.5,
            hint_confidence: 0.7,
            extraction_cache_capacity: 1000,
            lookup_cache_capacity: 1000,
        }
    }
}

impl LocalizationConfig {
    /// Whether rules for `framework` should run
    ///
    /// `jsx`/`tsx` count as React.
    pub fn supports(&self, framework: Framework) -> bool {
        let wanted = match framework {
            Framework::Jsx | Framework::Tsx => Framework::React,
            other => other,
        };
        self.supported_frameworks
            .iter()
            .filter_map(|name| Framework::parse(name))
            .any(|fw| fw == wanted)
    }
}

impl Config {
    /// Load from a TOML file, then validate and normalize
    pub fn load(path: &Path) -> TranslatorResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| TranslatorError::io(path, e))?;
        Self::from_toml(&content).map_err(|e| match e {
            TranslatorError::Config(msg) => {
                TranslatorError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> TranslatorResult<Self> {
        let mut config: Config =
            toml::from_str(content).map_err(|e| TranslatorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and normalize locale codes in place
    pub fn validate(&mut self) -> TranslatorResult<()> {
        validate_locale(&self.general.target_language)?;
        validate_locale(&self.ui.target_language)?;
        self.general.target_language = normalize_locale(&self.general.target_language);
        self.ui.target_language = normalize_locale(&self.ui.target_language);

        let mut sources = Vec::with_capacity(self.general.source_languages.len());
        for source in &self.general.source_languages {
            let source = normalize_locale(source);
            if source != TranslationRecord::AUTO_LANGUAGE {
                validate_locale(&source)?;
            }
            sources.push(source);
        }
        if sources.is_empty() {
            sources.push(TranslationRecord::AUTO_LANGUAGE.to_string());
        }
        self.general.source_languages = sources;

        for (name, value) in [
            ("general.min_confidence", self.general.min_confidence),
            ("ui.min_confidence", self.ui.min_confidence),
            ("ui.hint_confidence", self.ui.hint_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TranslatorError::Config(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        for name in &self.ui.supported_frameworks {
            if Framework::parse(name).is_none() {
                return Err(TranslatorError::Config(format!(
                    "unknown framework in ui.supported_frameworks: {}",
                    name
                )));
            }
        }

        self.ui.include_file_types = self
            .ui
            .include_file_types
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .collect();
        Ok(())
    }
}
