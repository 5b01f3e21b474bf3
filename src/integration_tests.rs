//! End-to-end tests for the localization pipeline
//!
//! Each test builds a small workspace in a temporary directory and drives it
//! through extraction, lookup, the store and the locale file writer.

use crate::actions::{ActionKind, code_actions};
use crate::config::Config;
use crate::localization::{LocalizationProvider, load_locales_dir};
use crate::lookup::{MockMode, MockTranslator, TranslationProvider};
use crate::manager::UiTranslationManager;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn sample_workspace(root: &Path) {
    write(
        root,
        "src/App.jsx",
        r#"export const App = () => (
  <form>
    <input type="password" placeholder="Wachtwoord" />
    <button className="primary">Guardar</button>
  </form>
);
"#,
    );
    write(
        root,
        "src/Form.vue",
        "<template>\n  <button @click=\"close\">Cancelar</button>\n</template>\n",
    );
    write(
        root,
        "public/search.html",
        "<label for=\"q\">Buscar</label>\n<input id=\"q\">\n",
    );
    write(root, "src/styles.css", ".primary { color: red; }");
    write(root, "node_modules/widget/Button.jsx", "<button>Eliminar</button>");
}

// ============================================================================
// Workspace generation
// ============================================================================

#[tokio::test]
async fn test_generate_workspace_locales() {
    let dir = tempfile::tempdir().unwrap();
    sample_workspace(dir.path());

    let mut provider = LocalizationProvider::from_config(Default::default());
    let report = provider
        .generate_localization_files(dir.path())
        .await
        .unwrap();

    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.translations, 4);
    assert_eq!(report.languages, vec!["en"]);
    assert_eq!(report.written.len(), 2);

    let catalog = load_locales_dir(&dir.path().join("locales")).unwrap();
    assert_eq!(catalog.supported_languages(), vec!["en"]);
    assert_eq!(catalog.get_translation("App_button_guardar", "en"), "save");
    assert_eq!(catalog.get_translation("App_placeholder_wachtwoord", "en"), "password");
    assert_eq!(catalog.get_translation("Form_button_cancelar", "en"), "cancel");
    assert_eq!(catalog.get_translation("search_label_buscar", "en"), "search");
    // Excluded directories never reach the catalog
    assert_eq!(
        catalog.get_translation("Button_button_eliminar", "en"),
        "Button_button_eliminar"
    );

    let index = fs::read_to_string(dir.path().join("locales/index.js")).unwrap();
    assert!(index.contains("supportedLanguages: ['en']"));
}

#[tokio::test]
async fn test_generate_with_configured_target_language() {
    let dir = tempfile::tempdir().unwrap();
    sample_workspace(dir.path());

    let config = Config::from_toml(
        r#"
[ui]
target_language = "FR"
exclude_patterns = ["node_modules", "public"]
"#,
    )
    .unwrap();
    let mut provider = LocalizationProvider::from_config(config.ui);
    let report = provider
        .generate_localization_files(dir.path())
        .await
        .unwrap();

    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.languages, vec!["fr"]);
    let catalog = load_locales_dir(&dir.path().join("locales")).unwrap();
    assert_eq!(catalog.get_translation("App_button_guardar", "fr"), "enregistrer");
    assert_eq!(catalog.get_translation("App_placeholder_wachtwoord", "fr"), "mot de passe");
}

#[tokio::test]
async fn test_failing_backend_writes_empty_index() {
    let dir = tempfile::tempdir().unwrap();
    sample_workspace(dir.path());

    let backend = MockTranslator::new(MockMode::Error("service unavailable".to_string()));
    let mut provider =
        LocalizationProvider::new(Default::default(), TranslationProvider::new(Box::new(backend)));
    let report = provider
        .generate_localization_files(dir.path())
        .await
        .unwrap();

    assert_eq!(report.translations, 0);
    assert!(report.languages.is_empty());
    assert_eq!(report.written.len(), 1);
    let index = fs::read_to_string(dir.path().join("locales/index.js")).unwrap();
    assert!(index.contains("supportedLanguages: []"));
}

// ============================================================================
// Hints and code actions
// ============================================================================

#[tokio::test]
async fn test_replace_action_rewrites_source() {
    let content = "<div>\n  <button>Guardar</button>\n</div>";
    let mut provider = LocalizationProvider::from_config(Default::default());
    let analysis = provider.analyze_document("src/Toolbar.tsx", content).await;
    assert_eq!(analysis.hints.len(), 1);

    let actions = code_actions(&analysis.hints, "src/Toolbar.tsx");
    let replace = actions
        .iter()
        .find(|a| a.kind == ActionKind::QuickFix && a.edit.is_some())
        .unwrap();
    let edit = replace.edit.as_ref().unwrap();

    let mut updated = content.to_string();
    updated.replace_range(edit.range.start..edit.range.end, &edit.new_text);
    assert_eq!(updated, "<div>\n  <button>save</button>\n</div>");

    let key_edit = actions[1].edit.as_ref().unwrap();
    assert_eq!(key_edit.new_text, "t('guardar')");
}

#[tokio::test]
async fn test_unchanged_document_is_served_from_caches() {
    let content = r#"<button>Opslaan</button><input placeholder="Zoeken">"#;
    let mut provider = LocalizationProvider::from_config(Default::default());

    let first = provider.analyze_document("src/Bar.jsx", content).await;
    let second = provider.analyze_document("src/Bar.jsx", content).await;
    assert_eq!(first.hints, second.hints);

    let manager = provider.manager();
    assert_eq!(manager.extraction_cache_stats().hits, 1);
    assert_eq!(manager.store().len(), 2);
}

// ============================================================================
// Persistence
// ============================================================================

#[tokio::test]
async fn test_export_import_round_trip_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    sample_workspace(dir.path());

    let mut first = LocalizationProvider::from_config(Default::default());
    first.generate_localization_files(dir.path()).await.unwrap();
    let exported = first.manager().export_translations().unwrap();
    let export_path = dir.path().join("translations.json");
    fs::write(&export_path, &exported).unwrap();

    let mut second = UiTranslationManager::default();
    let imported = second
        .import_translations(&fs::read_to_string(&export_path).unwrap())
        .unwrap();
    assert_eq!(imported, 4);

    for original in first.manager().get_all_translations() {
        assert_eq!(second.get_translation(&original.key), Some(original));
    }
    assert_eq!(second.export_translations().unwrap(), exported);
}

#[tokio::test]
async fn test_imported_review_reaches_locale_files() {
    let dir = tempfile::tempdir().unwrap();
    sample_workspace(dir.path());

    let reviewed = r#"[
  {
    "key": "App_button_guardar",
    "originalText": "Guardar",
    "translatedText": "Save changes",
    "context": { "elementType": "button", "framework": "react", "filePath": "src/App.jsx" },
    "language": "en",
    "confidence": 1.0,
    "lastUpdated": "2026-01-05T10:00:00Z"
  },
  {
    "key": "Legacy_label_naam",
    "originalText": "Naam",
    "translatedText": "Full name",
    "context": { "elementType": "label", "filePath": "legacy/Form.jsx" },
    "language": "en",
    "confidence": 1.0,
    "lastUpdated": "2026-01-05T10:00:00Z"
  }
]"#;

    let mut provider = LocalizationProvider::from_config(Default::default());
    assert_eq!(provider.manager_mut().import_translations(reviewed).unwrap(), 2);
    let report = provider
        .generate_localization_files(dir.path())
        .await
        .unwrap();

    assert_eq!(report.translations, 5);
    let catalog = load_locales_dir(&dir.path().join("locales")).unwrap();
    assert_eq!(catalog.get_translation("App_button_guardar", "en"), "Save changes");
    assert_eq!(catalog.get_translation("Legacy_label_naam", "en"), "Full name");
    assert_eq!(catalog.get_translation("Form_button_cancelar", "en"), "cancel");

    let exported = provider.manager().export_translations().unwrap();
    assert!(exported.contains("\"translatedText\": \"Save changes\""));
}
