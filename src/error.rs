//! Error types for the translation pipeline
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslatorError {
    /// The translation backend failed to produce a result
    #[error("Lookup error: {0}")]
    Lookup(String),
    /// A translation export could not be parsed; nothing was imported
    #[error("Import parse error: {0}")]
    ImportParse(String),
    /// File system failure while reading or writing workspace files
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Configuration file is missing fields or malformed
    #[error("Configuration error: {0}")]
    Config(String),
    /// Locale code contains characters outside `[A-Za-z0-9_-]`
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
    /// Records could not be serialized to JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TranslatorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TranslatorError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the caller can degrade to "skip this item" instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        match self {
            TranslatorError::Lookup(_) => true,
            TranslatorError::ImportParse(_) => true,
            TranslatorError::Io { .. } => true,
            TranslatorError::Config(_) => false,
            TranslatorError::InvalidLocale(_) => false,
            TranslatorError::Serialization(_) => false,
        }
    }
}

impl From<serde_json::Error> for TranslatorError {
    fn from(err: serde_json::Error) -> Self {
        TranslatorError::Serialization(err.to_string())
    }
}

/// Result type for translation operations
pub type TranslatorResult<T> = Result<T, TranslatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TranslatorError::Lookup("backend offline".to_string());
        assert_eq!(err.to_string(), "Lookup error: backend offline");

        let err = TranslatorError::io(
            "locales/en.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "I/O error on 'locales/en.json': missing");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(TranslatorError::Lookup("x".into()).is_recoverable());
        assert!(TranslatorError::ImportParse("x".into()).is_recoverable());
        assert!(!TranslatorError::Config("x".into()).is_recoverable());
        assert!(!TranslatorError::InvalidLocale("x".into()).is_recoverable());
    }
}
