//! UI term extraction
//!
//! Turns raw markup into untranslated [`TranslationRecord`]s:
//!
//! 1. **Framework detection** - picks react/vue/angular/html from the file
//! 2. **Rule table** - framework-tagged patterns with pure extractors
//! 3. **Text filter** - drops strings not worth translating
//! 4. **Key generation** - stable keys for deduplication and locale files
//!
//! # Example
//!
//! ```ignore
//! use code_translator::extract::TermMatcher;
//!
//! let matcher = TermMatcher::new();
//! let terms = matcher.extract("<button>Guardar</button>", "src/App.jsx");
//! assert_eq!(terms[0].original_text, "Guardar");
//! ```

pub mod framework;
pub mod key;
pub mod rules;

pub use framework::{detect_framework, file_extension};
pub use key::{content_hash, generate_key, translation_key};
pub use rules::{Extractor, TranslationRule, default_rules};

use crate::filter::TextFilter;
use crate::model::{Framework, TranslationRecord, UiContext};
use tracing::trace;

/// Applies the rule table and text filter to a document
#[derive(Debug)]
pub struct TermMatcher {
    rules: Vec<TranslationRule>,
    filter: TextFilter,
}

impl Default for TermMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TermMatcher {
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    pub fn with_rules(rules: Vec<TranslationRule>) -> Self {
        Self {
            rules,
            filter: TextFilter::new(),
        }
    }

    pub fn rules(&self) -> &[TranslationRule] {
        &self.rules
    }

    /// Extract terms using the framework detected for `file_path`
    pub fn extract(&self, content: &str, file_path: &str) -> Vec<TranslationRecord> {
        let framework = detect_framework(file_path, content);
        self.extract_for(content, file_path, framework)
    }

    /// Extract terms for an already-known framework
    ///
    /// Rules run in declaration order. The same string matched by two rules
    /// yields two records; records with equal keys collapse later in the store.
    pub fn extract_for(
        &self,
        content: &str,
        file_path: &str,
        framework: Framework,
    ) -> Vec<TranslationRecord> {
        let mut records = Vec::new();

        for rule in self.rules.iter().filter(|rule| rule.applies_to(framework)) {
            for text in rule.extract(content) {
                if !self.filter.should_translate(&text) {
                    trace!(rule = rule.name, text = %text, "candidate rejected by filter");
                    continue;
                }
                let context = UiContext {
                    element_type: rule.element_type,
                    framework: rule.framework,
                    file_path: file_path.to_string(),
                    parent_element: None,
                };
                let key = generate_key(&text, rule.element_type, file_path);
                records.push(TranslationRecord::extracted(key, text, context));
            }
        }

        records
    }
}
