//! Editor code actions for translation hints
//!
//! Actions carry either a text edit, a typed command, or both. Commands are
//! serialized with their editor command id as the tag so a host can dispatch
//! them without string parsing.

use crate::extract::translation_key;
use crate::localization::{TextRange, TranslationHint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum EditorCommand {
    #[serde(rename = "codeTranslator.ignoreTranslation")]
    IgnoreTranslation { text: String, file: String },
    #[serde(rename = "codeTranslator.extractUIStrings")]
    ExtractUiStrings { file: String },
    #[serde(rename = "codeTranslator.showTranslationDetails")]
    ShowTranslationDetails { key: String },
}

impl EditorCommand {
    pub fn title(&self) -> &'static str {
        match self {
            EditorCommand::IgnoreTranslation { .. } => "Ignore Translation",
            EditorCommand::ExtractUiStrings { .. } => "Extract UI Strings",
            EditorCommand::ShowTranslationDetails { .. } => "Show Translation Details",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    QuickFix,
    Refactor,
}

/// Replace `range` with `new_text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub range: TextRange,
    pub new_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAction {
    pub title: String,
    pub kind: ActionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<TextEdit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<EditorCommand>,
}

impl CodeAction {
    fn with_edit(title: String, kind: ActionKind, range: TextRange, new_text: String) -> Self {
        Self {
            title,
            kind,
            edit: Some(TextEdit { range, new_text }),
            command: None,
        }
    }

    fn with_command(title: &str, kind: ActionKind, command: EditorCommand) -> Self {
        Self {
            title: title.to_string(),
            kind,
            edit: None,
            command: Some(command),
        }
    }
}

/// Actions offered for the hints of `file`
///
/// Each hint yields a replace quick fix, a "use translation key" refactor
/// and an ignore command. Without hints the only action extracts the file's
/// UI strings.
pub fn code_actions(hints: &[TranslationHint], file: &str) -> Vec<CodeAction> {
    if hints.is_empty() {
        return vec![CodeAction::with_command(
            "Extract UI strings for translation",
            ActionKind::Refactor,
            EditorCommand::ExtractUiStrings {
                file: file.to_string(),
            },
        )];
    }

    hints
        .iter()
        .flat_map(|hint| {
            [
                CodeAction::with_edit(
                    format!("Replace with \"{}\"", hint.translated_text),
                    ActionKind::QuickFix,
                    hint.range,
                    hint.translated_text.clone(),
                ),
                CodeAction::with_edit(
                    "Use translation key".to_string(),
                    ActionKind::Refactor,
                    hint.range,
                    format!("t('{}')", refactor_key(hint)),
                ),
                CodeAction::with_command(
                    "Ignore this translation",
                    ActionKind::QuickFix,
                    EditorCommand::IgnoreTranslation {
                        text: hint.original_text.clone(),
                        file: file.to_string(),
                    },
                ),
            ]
        })
        .collect()
}

/// Text without any ASCII letter or digit falls back to the record key
fn refactor_key(hint: &TranslationHint) -> String {
    let key = translation_key(&hint.original_text);
    if key.is_empty() { hint.key.clone() } else { key }
}
