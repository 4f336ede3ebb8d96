//! Error types for result serialization.

use thiserror::Error;

/// Errors that can occur while reading or writing result files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializationError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the expected type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Nested lists do not form a rectangular array.
    #[error("Invalid array shape: {0}")]
    Shape(String),

    /// The document carries a different schema tag.
    #[error("Expected schema '{expected}', found '{found}'")]
    SchemaMismatch {
        /// Schema the reader expects.
        expected: String,
        /// Schema found in the document.
        found: String,
    },

    /// A required field is absent.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A field is present but its value is not acceptable.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type for serialization operations.
pub type SerializationResult<T> = Result<T, SerializationError>;
