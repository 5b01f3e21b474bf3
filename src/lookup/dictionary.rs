//! Built-in bilingual dictionary backend
//!
//! A static table of common UI and programming terms in Spanish, Dutch and
//! French. Matching is exact and case-insensitive: no fuzzy or substring
//! matching happens here.

use crate::error::TranslatorResult;
use crate::lookup::translator::{TermTranslator, base_language};
use crate::model::TranslationResult;
use async_trait::async_trait;

/// Confidence reported when the table has an entry for the input
pub const HIT_CONFIDENCE: f64 = 0.9;
/// Confidence reported when the input is echoed back unchanged
pub const MISS_CONFIDENCE: f64 = 0.1;

/// Source term → translations per target language
const UI_TERMS: &[(&str, &[(&str, &str)])] = &[
    // Spanish
    ("guardar", &[("en", "save"), ("nl", "opslaan"), ("fr", "enregistrer")]),
    ("cancelar", &[("en", "cancel"), ("nl", "annuleren"), ("fr", "annuler")]),
    ("eliminar", &[("en", "delete"), ("nl", "verwijderen"), ("fr", "supprimer")]),
    ("editar", &[("en", "edit"), ("nl", "bewerken"), ("fr", "modifier")]),
    ("buscar", &[("en", "search"), ("nl", "zoeken"), ("fr", "rechercher")]),
    ("filtrar", &[("en", "filter"), ("nl", "filteren"), ("fr", "filtrer")]),
    ("ordenar", &[("en", "sort"), ("nl", "sorteren"), ("fr", "trier")]),
    ("ayuda", &[("en", "help"), ("nl", "help"), ("fr", "aide")]),
    // Dutch
    ("opslaan", &[("en", "save"), ("es", "guardar"), ("fr", "enregistrer")]),
    ("annuleren", &[("en", "cancel"), ("es", "cancelar"), ("fr", "annuler")]),
    ("verwijderen", &[("en", "delete"), ("es", "eliminar"), ("fr", "supprimer")]),
    ("bewerken", &[("en", "edit"), ("es", "editar"), ("fr", "modifier")]),
    ("zoeken", &[("en", "search"), ("es", "buscar"), ("fr", "rechercher")]),
    ("toevoegen", &[("en", "add"), ("es", "añadir"), ("fr", "ajouter")]),
    ("sluiten", &[("en", "close"), ("es", "cerrar"), ("fr", "fermer")]),
    ("openen", &[("en", "open"), ("es", "abrir"), ("fr", "ouvrir")]),
    // Dutch form labels
    ("naam", &[("en", "name"), ("es", "nombre"), ("fr", "nom")]),
    ("email", &[("en", "email"), ("es", "correo"), ("fr", "courriel")]),
    ("wachtwoord", &[("en", "password"), ("es", "contraseña"), ("fr", "mot de passe")]),
    ("gebruikersnaam", &[("en", "username"), ("es", "usuario"), ("fr", "nom d'utilisateur")]),
    ("telefoon", &[("en", "phone"), ("es", "teléfono"), ("fr", "téléphone")]),
    ("adres", &[("en", "address"), ("es", "dirección"), ("fr", "adresse")]),
    // French
    ("enregistrer", &[("en", "save"), ("es", "guardar"), ("nl", "opslaan")]),
    ("annuler", &[("en", "cancel"), ("es", "cancelar"), ("nl", "annuleren")]),
    ("supprimer", &[("en", "delete"), ("es", "eliminar"), ("nl", "verwijderen")]),
    ("modifier", &[("en", "edit"), ("es", "editar"), ("nl", "bewerken")]),
    ("rechercher", &[("en", "search"), ("es", "buscar"), ("nl", "zoeken")]),
    ("ajouter", &[("en", "add"), ("es", "añadir"), ("nl", "toevoegen")]),
    ("fermer", &[("en", "close"), ("es", "cerrar"), ("nl", "sluiten")]),
    ("ouvrir", &[("en", "open"), ("es", "abrir"), ("nl", "openen")]),
];

/// Programming vocabulary, translated to English only
const CODE_TERMS: &[(&str, &str)] = &[
    // Spanish
    ("hola", "hello"),
    ("mundo", "world"),
    ("función", "function"),
    ("variable", "variable"),
    ("clase", "class"),
    ("método", "method"),
    ("comentario", "comment"),
    ("cadena", "string"),
    ("número", "number"),
    ("booleano", "boolean"),
    ("verdadero", "true"),
    ("falso", "false"),
    ("si", "if"),
    ("entonces", "then"),
    ("sino", "else"),
    ("para", "for"),
    ("mientras", "while"),
    ("hacer", "do"),
    ("retornar", "return"),
    ("importar", "import"),
    ("exportar", "export"),
    // Dutch
    ("hallo", "hello"),
    ("wereld", "world"),
    ("functie", "function"),
    ("variabele", "variable"),
    ("klasse", "class"),
    ("methode", "method"),
    ("opmerking", "comment"),
    ("tekst", "string"),
    ("getal", "number"),
    ("boolean", "boolean"),
    ("waar", "true"),
    ("onwaar", "false"),
    ("als", "if"),
    ("dan", "then"),
    ("anders", "else"),
    ("voor", "for"),
    ("terwijl", "while"),
    ("doen", "do"),
    ("teruggeven", "return"),
    ("importeren", "import"),
    ("exporteren", "export"),
    ("nieuw", "new"),
    ("deze", "this"),
    ("proberen", "try"),
    ("vangen", "catch"),
    ("eindelijk", "finally"),
    ("gooien", "throw"),
    ("schakelaar", "switch"),
    ("geval", "case"),
    ("standaard", "default"),
    ("breken", "break"),
    ("doorgaan", "continue"),
    ("lus", "loop"),
    ("ongedefinieerd", "undefined"),
];

/// Indicator words per source language, checked in order
const LANGUAGE_HINTS: &[(&str, &[&str])] = &[
    (
        "nl",
        &[
            "functie", "variabele", "klasse", "methode", "als", "dan", "anders", "voor",
            "terwijl", "waar", "onwaar", "opslaan", "annuleren", "verwijderen", "bewerken",
            "zoeken", "toevoegen", "sluiten", "openen", "naam", "wachtwoord", "gebruikersnaam",
            "telefoon", "adres", "hallo", "wereld",
        ],
    ),
    (
        "es",
        &[
            "función", "variable", "clase", "método", "si", "entonces", "sino", "para",
            "mientras", "verdadero", "falso", "guardar", "cancelar", "eliminar", "editar",
            "buscar", "filtrar", "ordenar", "ayuda", "hola", "mundo",
        ],
    ),
    (
        "fr",
        &[
            "enregistrer", "annuler", "supprimer", "modifier", "rechercher", "ajouter",
            "fermer", "ouvrir",
        ],
    ),
];

/// Look up `text` in the static tables for `target_locale`
fn table_lookup(text: &str, target_locale: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    let target = base_language(target_locale);

    let ui_hit = UI_TERMS
        .iter()
        .find(|(term, _)| *term == lower)
        .and_then(|(_, translations)| {
            translations
                .iter()
                .find(|(lang, _)| *lang == target)
                .map(|(_, translated)| *translated)
        });
    if ui_hit.is_some() {
        return ui_hit;
    }

    if target == "en" {
        return CODE_TERMS
            .iter()
            .find(|(term, _)| *term == lower)
            .map(|(_, translated)| *translated);
    }
    None
}

/// Infer the source language of `text` from the indicator word lists
///
/// Words are compared whole, case-insensitively. The first language with a
/// matching word wins; `"auto"` when nothing matches.
pub fn detect_source_language(text: &str) -> String {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    LANGUAGE_HINTS
        .iter()
        .find(|(_, hints)| words.iter().any(|w| hints.contains(w)))
        .map(|(lang, _)| lang.to_string())
        .unwrap_or_else(|| "auto".to_string())
}

/// Indicator words that are also ordinary English, so they say nothing
/// about the language of a UI string
const ENGLISH_HOMOGRAPHS: &[&str] = &["variable", "modifier", "para", "hallo"];

/// Shorter indicator words ("si", "als", "dan") collide with English
const MIN_FOREIGN_TERM_CHARS: usize = 4;

/// Whether `text` is a known non-English vocabulary word
///
/// Matching is exact and case-insensitive. Short words and words that are
/// also English never count.
pub fn is_foreign_term(text: &str) -> bool {
    let lower = text.to_lowercase();
    if lower.chars().count() < MIN_FOREIGN_TERM_CHARS
        || ENGLISH_HOMOGRAPHS.contains(&lower.as_str())
    {
        return false;
    }
    LANGUAGE_HINTS
        .iter()
        .any(|(_, hints)| hints.contains(&lower.as_str()))
}

/// Static-table backend; never fails for string input
#[derive(Debug, Clone, Default)]
pub struct DictionaryTranslator;

impl DictionaryTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous lookup shared by the async trait method and other backends
    pub fn lookup(&self, text: &str, target_locale: &str, source_locale: &str) -> TranslationResult {
        let (translated_text, confidence) = match table_lookup(text, target_locale) {
            Some(translated) => (translated.to_string(), HIT_CONFIDENCE),
            None => (text.to_string(), MISS_CONFIDENCE),
        };

        let source_language = if source_locale == "auto" {
            detect_source_language(text)
        } else {
            source_locale.to_string()
        };

        TranslationResult {
            original_text: text.to_string(),
            translated_text,
            source_language,
            target_language: target_locale.to_string(),
            confidence,
        }
    }
}

#[async_trait]
impl TermTranslator for DictionaryTranslator {
    async fn translate(
        &self,
        text: &str,
        target_locale: &str,
        source_locale: &str,
    ) -> TranslatorResult<TranslationResult> {
        Ok(self.lookup(text, target_locale, source_locale))
    }

    fn provider_name(&self) -> &str {
        "Static Dictionary"
    }
}
