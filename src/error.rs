use crate::editor::EditorError;
use crate::logging::LoggingError;
use crate::store::StoreError;
use std::io;

/// Unified error type for the schema builder binaries.
///
/// Each subsystem keeps its own error enum; this type gathers them so that
/// `main` functions and the startup path can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum SchemaBuilderError {
    /// Errors raised by the document store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors raised while editing or submitting a schema
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    /// Errors related to configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors raised while installing the logger
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Errors related to IO operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Conversion from serde_json::Error to SchemaBuilderError
impl From<serde_json::Error> for SchemaBuilderError {
    fn from(error: serde_json::Error) -> Self {
        SchemaBuilderError::Serialization(error.to_string())
    }
}

/// Result type alias for operations that can result in a SchemaBuilderError
pub type SchemaBuilderResult<T> = Result<T, SchemaBuilderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_keep_their_message() {
        let err: SchemaBuilderError = StoreError::Unavailable("disk gone".into()).into();
        assert_eq!(err.to_string(), "Store error: storage unavailable: disk gone");
    }

    #[test]
    fn serde_errors_become_serialization_errors() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SchemaBuilderError::from(parse);
        assert!(matches!(err, SchemaBuilderError::Serialization(_)));
    }
}
