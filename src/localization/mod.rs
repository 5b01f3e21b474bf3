//! Workspace-level UI localization
//!
//! `LocalizationProvider` decides which files to analyze, runs them through
//! the [`UiTranslationManager`], and turns the results into hints and locale
//! files.

pub mod hints;
pub mod loader;
pub mod writer;

pub use hints::{TextRange, TranslationHint, find_text_ranges, translation_hints};
pub use loader::{LocaleCatalog, LocalizedMessages, load_locale_file, load_locales_dir};
pub use writer::{GroupedTranslations, LocalizationFileWriter, generate_index, group_translations};

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LocalizationConfig;
use crate::error::TranslatorResult;
use crate::extract::{detect_framework, file_extension};
use crate::lookup::{DictionaryTranslator, TranslationProvider};
use crate::manager::UiTranslationManager;
use crate::model::TranslationRecord;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Accepted translations for one document and where they occur
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentAnalysis {
    pub translations: Vec<TranslationRecord>,
    pub hints: Vec<TranslationHint>,
}

impl DocumentAnalysis {
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

/// Summary of a locale generation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub translations: usize,
    pub languages: Vec<String>,
    pub written: Vec<PathBuf>,
}

pub struct LocalizationProvider {
    config: LocalizationConfig,
    manager: UiTranslationManager,
}

impl LocalizationProvider {
    pub fn new(config: LocalizationConfig, provider: TranslationProvider) -> Self {
        let manager = UiTranslationManager::new(provider)
            .with_extraction_cache_capacity(config.extraction_cache_capacity)
            .with_min_confidence(config.min_confidence);
        Self { config, manager }
    }

    /// Provider using the built-in dictionary
    pub fn from_config(config: LocalizationConfig) -> Self {
        let provider = TranslationProvider::with_capacity(
            Box::new(DictionaryTranslator::new()),
            config.lookup_cache_capacity,
        );
        Self::new(config, provider)
    }

    pub fn config(&self) -> &LocalizationConfig {
        &self.config
    }

    pub fn manager(&self) -> &UiTranslationManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut UiTranslationManager {
        &mut self.manager
    }

    /// Included extension and no exclude pattern in the path
    pub fn should_analyze_file(&self, file_path: &str) -> bool {
        let Some(extension) = file_extension(file_path) else {
            return false;
        };
        if !self.config.include_file_types.iter().any(|t| *t == extension) {
            return false;
        }
        !self
            .config
            .exclude_patterns
            .iter()
            .any(|pattern| file_path.contains(pattern.as_str()))
    }

    /// Extract, translate and locate UI strings in one document
    pub async fn analyze_document(&mut self, file_path: &str, content: &str) -> DocumentAnalysis {
        if !self.config.enabled || !self.should_analyze_file(file_path) {
            return DocumentAnalysis::default();
        }

        let framework = detect_framework(file_path, content);
        if !self.config.supports(framework) {
            debug!(file_path, framework = %framework, "framework not enabled, skipping");
            return DocumentAnalysis::default();
        }

        let terms = self
            .manager
            .extract_ui_terms_for(content, file_path, framework);
        if terms.is_empty() {
            return DocumentAnalysis::default();
        }

        let target = self.config.target_language.clone();
        let translations = self.manager.translate_ui_terms(&terms, &target).await;
        let hints = translation_hints(content, &translations, self.config.hint_confidence);
        DocumentAnalysis {
            translations,
            hints,
        }
    }

    /// Entry point for document open/change events; honours `auto_detect`
    pub async fn on_document_changed(&mut self, file_path: &str, content: &str) -> DocumentAnalysis {
        if !self.config.auto_detect {
            return DocumentAnalysis::default();
        }
        self.analyze_document(file_path, content).await
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry.depth() > 0
            && self
                .config
                .exclude_patterns
                .iter()
                .any(|pattern| entry.file_name().to_string_lossy() == pattern.as_str())
    }

    /// Files under `workspace` that should be analyzed, in path order
    pub fn workspace_files(&self, workspace: &Path) -> Vec<PathBuf> {
        WalkDir::new(workspace)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_dir(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable workspace entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                let relative = entry.path().strip_prefix(workspace).unwrap_or(entry.path());
                self.should_analyze_file(&relative.to_string_lossy())
            })
            .map(DirEntry::into_path)
            .collect()
    }

    /// Analyze every workspace file and write `<workspace>/locales`
    pub async fn generate_localization_files(
        &mut self,
        workspace: &Path,
    ) -> TranslatorResult<GenerationReport> {
        let mut report = GenerationReport::default();

        for path in self.workspace_files(workspace) {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    report.files_skipped += 1;
                    continue;
                }
            };
            report.files_scanned += 1;

            let relative = path.strip_prefix(workspace).unwrap_or(&path);
            let file_path = relative.to_string_lossy();
            self.analyze_document(&file_path, &content).await;
        }

        // Imported records take part even when no scanned file mentions them
        let stored: Vec<&TranslationRecord> = self
            .manager
            .store()
            .get_all()
            .into_iter()
            .filter(|r| r.is_translated())
            .collect();
        let grouped = group_translations(stored.iter().copied());
        report.translations = stored.len();
        report.languages = grouped.keys().cloned().collect();
        report.written = LocalizationFileWriter::new(workspace).write(&grouped)?;

        info!(
            files = report.files_scanned,
            translations = report.translations,
            "generated localization files"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> LocalizationProvider {
        LocalizationProvider::from_config(LocalizationConfig::default())
    }

    #[test]
    fn test_should_analyze_file() {
        let provider = provider();
        assert!(provider.should_analyze_file("src/App.jsx"));
        assert!(provider.should_analyze_file("src/index.HTML"));
        assert!(!provider.should_analyze_file("src/style.css"));
        assert!(!provider.should_analyze_file("node_modules/lib/App.jsx"));
        assert!(!provider.should_analyze_file("dist/bundle.js"));
        assert!(!provider.should_analyze_file("Makefile"));
    }

    #[tokio::test]
    async fn test_analyze_document_produces_hints() {
        let mut provider = provider();
        let content = "<form>\n  <button>Guardar</button>\n  <label>Wachtwoord</label>\n</form>";
        let analysis = provider.analyze_document("src/Login.jsx", content).await;

        assert_eq!(analysis.translations.len(), 2);
        assert_eq!(analysis.hints.len(), 2);
        assert_eq!(analysis.hints[0].range.line, 1);
        assert_eq!(analysis.hints[1].translated_text, "password");
        assert_eq!(provider.manager().store().len(), 2);
    }

    #[tokio::test]
    async fn test_disabled_or_excluded_documents() {
        let mut config = LocalizationConfig::default();
        config.enabled = false;
        let mut disabled = LocalizationProvider::from_config(config);
        assert!(
            disabled
                .analyze_document("App.jsx", "<button>Guardar</button>")
                .await
                .is_empty()
        );

        let mut enabled = provider();
        assert!(
            enabled
                .analyze_document("build/App.jsx", "<button>Guardar</button>")
                .await
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_unsupported_framework_is_skipped() {
        let mut config = LocalizationConfig::default();
        config.supported_frameworks = vec!["vue".to_string()];
        let mut provider = LocalizationProvider::from_config(config);
        let analysis = provider
            .analyze_document("App.jsx", "<button>Guardar</button>")
            .await;
        assert!(analysis.is_empty());
    }

    #[tokio::test]
    async fn test_auto_detect_gates_change_events() {
        let mut config = LocalizationConfig::default();
        config.auto_detect = false;
        let mut provider = LocalizationProvider::from_config(config);
        let content = "<button>Guardar</button>";
        assert!(provider.on_document_changed("App.jsx", content).await.is_empty());
        assert!(!provider.analyze_document("App.jsx", content).await.is_empty());
    }

    #[test]
    fn test_workspace_files_skip_excluded_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join("src/App.jsx"), "").unwrap();
        fs::write(root.join("src/notes.txt"), "").unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "").unwrap();
        fs::write(root.join("index.html"), "").unwrap();

        let files = provider().workspace_files(root);
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["index.html", "src/App.jsx"]);
    }
}
