//! Stable keys and content hashes

use crate::model::ElementType;

/// File name without directory or last extension; `"unknown"` when empty
fn file_stem(file_path: &str) -> &str {
    let name = file_path.rsplit(['/', '\\']).next().unwrap_or(file_path);
    let stem = match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    };
    if stem.is_empty() { "unknown" } else { stem }
}

/// Key for a term: `<file stem>_<element type>_<normalized text>`
///
/// Normalization lowercases the text and replaces every character that is
/// not alphanumeric with `_`. Letters outside ASCII are kept, so `café` and
/// `cafe` get different keys.
pub fn generate_key(text: &str, element_type: ElementType, file_path: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            normalized.extend(c.to_lowercase());
        } else {
            normalized.push('_');
        }
    }
    format!("{}_{}_{}", file_stem(file_path), element_type, normalized)
}

/// Identifier-style key used when replacing a literal with `t('<key>')`
///
/// Lowercased, runs of anything outside `[a-z0-9]` collapsed to one `_`,
/// leading and trailing `_` removed.
pub fn translation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            key.push(c);
        } else if !key.ends_with('_') {
            key.push('_');
        }
    }
    key.trim_matches('_').to_string()
}

/// Hex digest of document content, used to key the extraction cache
pub fn content_hash(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}
