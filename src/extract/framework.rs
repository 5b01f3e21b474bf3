//! Best-effort framework detection from file extension and content

use crate::model::Framework;
use regex::Regex;
use std::sync::LazyLock;

/// Angular-style bound attribute such as `[placeholder]=` or `[(ngModel)]=`
static BOUND_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\(?[A-Za-z][\w.-]*\)?\]\s*=").expect("bound attribute pattern must compile")
});

/// Lowercased extension of the last path segment, if any
pub fn file_extension(file_path: &str) -> Option<String> {
    let name = file_path.rsplit(['/', '\\']).next().unwrap_or(file_path);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Classify a file's UI framework
///
/// Ambiguous input falls back to plain HTML.
pub fn detect_framework(file_path: &str, content: &str) -> Framework {
    match file_extension(file_path).as_deref() {
        Some("jsx") | Some("tsx") => Framework::React,
        Some("vue") => Framework::Vue,
        Some("html") | Some("htm") => {
            if content.contains("ng-") || content.contains("{{") || BOUND_ATTRIBUTE.is_match(content)
            {
                Framework::Angular
            } else {
                Framework::Html
            }
        }
        Some("js") | Some("ts") if content.contains("React") || content.contains("jsx") => {
            Framework::React
        }
        _ => Framework::Html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("src/App.JSX").as_deref(), Some("jsx"));
        assert_eq!(file_extension(r"C:\web\index.html").as_deref(), Some("html"));
        assert_eq!(file_extension("Makefile"), None);
        assert_eq!(file_extension("src/.env"), None);
        assert_eq!(file_extension("dir.v2/README"), None);
    }

    #[test]
    fn test_extension_based_frameworks() {
        assert_eq!(detect_framework("App.jsx", ""), Framework::React);
        assert_eq!(detect_framework("App.tsx", ""), Framework::React);
        assert_eq!(detect_framework("Form.vue", "{{ naam }}"), Framework::Vue);
    }

    #[test]
    fn test_html_sniffing() {
        assert_eq!(detect_framework("a.html", "<p>Hallo</p>"), Framework::Html);
        assert_eq!(detect_framework("a.html", "<p>{{ titel }}</p>"), Framework::Angular);
        assert_eq!(detect_framework("a.html", r#"<div ng-if="x">"#), Framework::Angular);
        assert_eq!(
            detect_framework("a.html", r#"<input [placeholder]="'Naam'">"#),
            Framework::Angular
        );
        // A bare bracket in text is not a binding
        assert_eq!(detect_framework("a.html", "<p>[1] note</p>"), Framework::Html);
    }

    #[test]
    fn test_script_sniffing() {
        assert_eq!(
            detect_framework("main.js", "import React from 'react'"),
            Framework::React
        );
        assert_eq!(detect_framework("main.ts", "export const x = 1"), Framework::Html);
        assert_eq!(detect_framework("style.css", "a {}"), Framework::Html);
    }
}
