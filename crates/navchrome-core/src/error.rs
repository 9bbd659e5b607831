//! Error types for Navchrome core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading navigation configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Two top-level menu items share the same URL.
    #[error("Duplicate menu URL: {0}")]
    DuplicateMenuUrl(String),

    /// Two notifications share the same id.
    #[error("Duplicate notification id: {0}")]
    DuplicateNotificationId(u64),

    /// A menu, submenu or profile entry has an empty label.
    #[error("Empty label for entry: {0}")]
    EmptyLabel(String),

    /// Configuration is structurally valid JSON but semantically wrong.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_url_display() {
        let err = Error::DuplicateMenuUrl("/about".to_string());
        assert_eq!(err.to_string(), "Duplicate menu URL: /about");
    }

    #[test]
    fn test_empty_label_display() {
        let err = Error::EmptyLabel("/contact".to_string());
        assert_eq!(err.to_string(), "Empty label for entry: /contact");
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = serde_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
