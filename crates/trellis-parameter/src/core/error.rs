use thiserror::Error;
use trellis_value::ValueKind;

use crate::core::key::{KeyParseError, ParameterId, ParameterKey};

/// Main error type for parameter registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// Invalid format or content for a parameter key string
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(#[from] KeyParseError),

    /// No entry with the given id exists in the registry
    #[error("Unknown parameter id: {id}")]
    UnknownParameter {
        /// The unresolved identifier
        id: ParameterId,
    },

    /// Parameter with the specified key already exists
    #[error("Parameter already exists: {key}")]
    AlreadyExists {
        /// The parameter key
        key: ParameterKey,
    },

    /// A value of the wrong kind was assigned to an entry
    #[error("Type error for parameter '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// The parameter key
        key: ParameterKey,
        /// Kind declared at insertion
        expected: ValueKind,
        /// Kind of the rejected value
        actual: ValueKind,
    },
}

impl ParameterError {
    /// Create an "unknown parameter" error
    pub fn unknown(id: ParameterId) -> Self {
        Self::UnknownParameter { id }
    }

    /// Create an "already exists" error
    pub fn already_exists(key: ParameterKey) -> Self {
        Self::AlreadyExists { key }
    }

    /// Create a "type mismatch" error
    pub fn type_mismatch(key: ParameterKey, expected: ValueKind, actual: ValueKind) -> Self {
        Self::TypeMismatch {
            key,
            expected,
            actual,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidKeyFormat(_) => "invalid_key_format",
            Self::UnknownParameter { .. } => "unknown_parameter",
            Self::AlreadyExists { .. } => "already_exists",
            Self::TypeMismatch { .. } => "type_mismatch",
        }
    }
}

/// Result type alias for parameter registry operations
pub type Result<T> = std::result::Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_parameter_names_the_id() {
        let err = ParameterError::unknown(ParameterId::from_raw(42));
        assert!(err.to_string().contains("42"));
        assert_eq!(err.category(), "unknown_parameter");
    }

    #[test]
    fn test_type_mismatch_message() {
        let key = ParameterKey::new("Tolerance").unwrap();
        let err = ParameterError::type_mismatch(key, ValueKind::Float, ValueKind::Text);
        assert!(err.to_string().contains("Tolerance"));
        assert!(err.to_string().contains("float"));
        assert!(err.to_string().contains("text"));
    }
}
