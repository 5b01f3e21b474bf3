//! # code-translator
//!
//! Finds human-readable UI strings in front-end source files, decides which
//! ones are not English, translates them through a cached lookup and writes
//! per-language locale files. The same lookup powers hover and completion
//! translations for words in ordinary source code.
//!
//! ```ignore
//! use code_translator::{TranslationProvider, UiTranslationManager};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut manager = UiTranslationManager::new(TranslationProvider::dictionary());
//!     let terms = manager.extract_ui_terms("<button>Guardar</button>", "src/App.jsx");
//!     let translated = manager.translate_ui_terms(&terms, "en").await;
//!     assert_eq!(translated[0].translated_text, "save");
//! }
//! ```

pub mod actions;
pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod inline;
pub mod localization;
pub mod lookup;
pub mod manager;
pub mod model;
pub mod store;

#[cfg(test)]
mod integration_tests;

pub use actions::{ActionKind, CodeAction, EditorCommand, TextEdit, code_actions};
pub use config::{Config, LocalizationConfig, TranslatorConfig};
pub use error::{TranslatorError, TranslatorResult};
pub use extract::{TermMatcher, TranslationRule, detect_framework, generate_key};
pub use filter::{FilterVerdict, TextFilter, is_non_english_text};
pub use inline::{CodeContext, CompletionSuggestion, HoverInfo, InlineTranslator, word_at};
pub use localization::{
    DocumentAnalysis, GenerationReport, LocaleCatalog, LocalizationFileWriter,
    LocalizationProvider, TranslationHint,
};
pub use lookup::{DictionaryTranslator, MockMode, MockTranslator, TermTranslator, TranslationProvider};
pub use manager::UiTranslationManager;
pub use model::{ElementType, Framework, TranslationRecord, TranslationResult, UiContext};
pub use store::TranslationStore;
