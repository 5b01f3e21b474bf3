//! Extraction rule table
//!
//! Each rule pairs a case-insensitive pattern with the element type and
//! framework it belongs to, plus a pure extractor that turns one match into
//! zero or more literal strings.

use crate::model::{ElementType, Framework};
use regex::{Captures, Regex};

/// Turns one pattern match (and the full document) into candidate strings
pub type Extractor = fn(&Captures<'_>, &str) -> Vec<String>;

pub struct TranslationRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub element_type: ElementType,
    /// `None` applies the rule to every framework
    pub framework: Option<Framework>,
    pub extractor: Extractor,
}

impl TranslationRule {
    /// Build a rule; the pattern is compiled case-insensitively
    pub fn new(
        name: &'static str,
        pattern: &str,
        element_type: ElementType,
        framework: Option<Framework>,
        extractor: Extractor,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(&format!("(?i){}", pattern))?,
            element_type,
            framework,
            extractor,
        })
    }

    pub fn applies_to(&self, framework: Framework) -> bool {
        self.framework.is_none_or(|own| own == framework)
    }

    /// All strings this rule pulls out of `content`, in document order
    pub fn extract(&self, content: &str) -> Vec<String> {
        self.pattern
            .captures_iter(content)
            .flat_map(|caps| (self.extractor)(&caps, content))
            .collect()
    }
}

impl std::fmt::Debug for TranslationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("element_type", &self.element_type)
            .field("framework", &self.framework)
            .finish()
    }
}

fn group(caps: &Captures<'_>, index: usize) -> Vec<String> {
    caps.get(index)
        .map(|m| vec![m.as_str().to_string()])
        .unwrap_or_default()
}

pub fn first_group(caps: &Captures<'_>, _content: &str) -> Vec<String> {
    group(caps, 1)
}

pub fn first_group_trimmed(caps: &Captures<'_>, _content: &str) -> Vec<String> {
    group(caps, 1).into_iter().map(|s| s.trim().to_string()).collect()
}

pub fn second_group_trimmed(caps: &Captures<'_>, _content: &str) -> Vec<String> {
    group(caps, 2).into_iter().map(|s| s.trim().to_string()).collect()
}

/// The built-in rule table, in evaluation order
pub fn default_rules() -> Vec<TranslationRule> {
    use ElementType::*;
    use Framework::*;

    let table: [(&'static str, &str, ElementType, Framework, Extractor); 11] = [
        // React / JSX
        ("react-button", r"<button[^>]*>([^<]+)</button>", Button, React, first_group_trimmed),
        ("react-placeholder", r#"placeholder=["']([^"']+)["']"#, Placeholder, React, first_group),
        ("react-label", r"<label[^>]*>([^<]+)</label>", Label, React, first_group_trimmed),
        ("react-title", r#"title=["']([^"']+)["']"#, Tooltip, React, first_group),
        ("react-alt", r#"alt=["']([^"']+)["']"#, Label, React, first_group),
        // Vue
        ("vue-button", r"<button[^>]*>([^<]+)</button>", Button, Vue, first_group_trimmed),
        ("vue-placeholder", r#"v-placeholder=["']([^"']+)["']"#, Placeholder, Vue, first_group),
        // Angular
        ("angular-interpolation", r"\{\{([^}]+)\}\}", Label, Angular, first_group_trimmed),
        (
            "angular-placeholder",
            r#"\[placeholder\]=["']'?([^"']+)'?["']"#,
            Placeholder,
            Angular,
            first_group,
        ),
        // Plain HTML
        (
            "html-label-for",
            r#"<label[^>]*for=["']([^"']+)["'][^>]*>([^<]+)</label>"#,
            Label,
            Html,
            second_group_trimmed,
        ),
        (
            "html-submit",
            r#"<input[^>]*type=["']submit["'][^>]*value=["']([^"']+)["']"#,
            Button,
            Html,
            first_group,
        ),
    ];

    table
        .into_iter()
        .map(|(name, pattern, element_type, framework, extractor)| {
            TranslationRule::new(name, pattern, element_type, Some(framework), extractor)
                .expect("built-in extraction pattern must compile")
        })
        .collect()
}
