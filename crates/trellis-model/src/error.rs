use thiserror::Error;

use crate::args::ArgId;

/// Main error type for model-evaluator operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An argument was set or read that the layout does not support
    #[error("Argument {arg} is not supported by this model's layout")]
    UnsupportedArg {
        /// The offending argument
        arg: ArgId,
    },

    /// A required argument was not set before evaluation
    #[error("Argument {arg} is required for evaluation but was not set")]
    MissingArg {
        /// The absent argument
        arg: ArgId,
    },

    /// A vector had the wrong length for this model
    #[error("Shape mismatch: expected length {expected}, got {actual}")]
    ShapeMismatch {
        /// Length the model requires
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// The backend model reported a failure
    #[error("Backend evaluation failed: {message}")]
    Backend {
        /// Backend-provided description
        message: String,
    },
}

impl ModelError {
    /// Create an "unsupported argument" error
    pub fn unsupported(arg: ArgId) -> Self {
        Self::UnsupportedArg { arg }
    }

    /// Create a "missing argument" error
    pub fn missing(arg: ArgId) -> Self {
        Self::MissingArg { arg }
    }

    /// Create a "shape mismatch" error
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    /// Create a backend failure from any displayable cause
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
