//! Translation lookup
//!
//! Word and phrase translation behind a provider-agnostic trait, with a
//! bounded lookup cache in front of it.
//!
//! # Overview
//!
//! 1. **Translator trait** - `TermTranslator`, the async seam for backends
//! 2. **Dictionary** - the built-in static bilingual table
//! 3. **Mock** - deterministic backend for exercising failure paths
//! 4. **Cache** - insertion-ordered (FIFO) capacity-bounded map
//! 5. **Provider** - cache + backend, degrading failures to `None`
//!
//! # Example
//!
//! ```ignore
//! use code_translator::lookup::TranslationProvider;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut provider = TranslationProvider::dictionary();
//!     if let Some(result) = provider.translate("wachtwoord", "en", "auto").await {
//!         println!("{} ({}%)", result.translated_text, result.confidence_percent());
//!     }
//! }
//! ```

pub mod cache;
pub mod dictionary;
pub mod mock;
pub mod provider;
pub mod translator;

pub use cache::{CacheStats, FifoCache};
pub use dictionary::{DictionaryTranslator, detect_source_language, is_foreign_term};
pub use mock::{MockMode, MockTranslator, hit_mappings};
pub use provider::{LookupKey, TranslationProvider};
pub use translator::{TermTranslator, base_language, normalize_locale, validate_locale};
