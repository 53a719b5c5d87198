use crate::kind::ValueKind;
use thiserror::Error;

/// Main error type for value operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A checked accessor was called on a value of a different kind
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Kind the caller asked for
        expected: ValueKind,
        /// Kind the value actually has
        actual: ValueKind,
    },
}

impl ValueError {
    /// Create a "type mismatch" error
    pub fn type_mismatch(expected: ValueKind, actual: ValueKind) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "type_mismatch",
        }
    }
}
