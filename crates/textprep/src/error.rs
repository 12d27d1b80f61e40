//! Error types for textprep.
//!
//! All fallible operations in this crate return [`Result`], backed by
//! [`TextPrepError`]. Errors follow two rules:
//!
//! - **Analysis errors** come from the language-analysis engine and are
//!   surfaced to the caller unchanged; nothing is retried internally.
//! - **Validation errors** indicate invalid configuration or parameters and
//!   are raised at construction time, before any text is touched.
//!
//! There is no partial-success mode: an operation either returns a new value
//! or fails with its input left unmodified.
use thiserror::Error;

/// Result type alias using `TextPrepError`.
pub type Result<T> = std::result::Result<T, TextPrepError>;

/// Main error type for all textprep operations.
///
/// # Variants
///
/// - `Analysis` - The analysis engine could not process the given text
/// - `Validation` - Invalid configuration or parameters
#[derive(Debug, Error)]
pub enum TextPrepError {
    #[error("Analysis error: {message}")]
    Analysis {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TextPrepError {
    /// Create an Analysis error
    pub fn analysis<S: Into<String>>(message: S) -> Self {
        Self::Analysis {
            message: message.into(),
            source: None,
        }
    }

    /// Create an Analysis error with source
    pub fn analysis_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Analysis {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Validation error with source
    pub fn validation_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_error() {
        let err = TextPrepError::analysis("engine rejected input");
        assert_eq!(err.to_string(), "Analysis error: engine rejected input");
    }

    #[test]
    fn test_analysis_error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad data");
        let err = TextPrepError::analysis_with_source("engine rejected input", source);
        assert_eq!(err.to_string(), "Analysis error: engine rejected input");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_validation_error() {
        let err = TextPrepError::validation("empty stopword");
        assert_eq!(err.to_string(), "Validation error: empty stopword");
    }

    #[test]
    fn test_validation_error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad param");
        let err = TextPrepError::validation_with_source("empty stopword", source);
        assert_eq!(err.to_string(), "Validation error: empty stopword");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_debug() {
        let err = TextPrepError::validation("test");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Validation"));
    }
}
