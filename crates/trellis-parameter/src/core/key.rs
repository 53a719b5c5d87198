//! Identifier types for parameters.
//!
//! `ParameterKey` is the human-facing name of a parameter; `ParameterId` is
//! the process-wide identity assigned by the registry at insertion. Conditions
//! and dependencies reference parameters by id, never by owning them.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when parsing a parameter key string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    /// The key string was empty
    #[error("Parameter key must not be empty")]
    Empty,

    /// The key string had leading or trailing whitespace
    #[error("Parameter key must not have surrounding whitespace: {0:?}")]
    SurroundingWhitespace(String),
}

/// Validated name of a parameter within a configuration tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParameterKey(String);

impl ParameterKey {
    /// Create a new parameter key from a string
    pub fn new(key: impl Into<String>) -> Result<Self, KeyParseError> {
        let key = key.into();
        if key.is_empty() {
            return Err(KeyParseError::Empty);
        }
        if key.trim() != key {
            return Err(KeyParseError::SurroundingWhitespace(key));
        }
        Ok(Self(key))
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ParameterKey {
    type Error = KeyParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unique identifier for a parameter entry
///
/// Assigned by [`ParameterRegistry::insert`](crate::core::ParameterRegistry::insert);
/// stable for the lifetime of the registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParameterId(u64);

impl ParameterId {
    /// Create a parameter id from its raw value
    ///
    /// Intended for the registry and for markup deserialization; ids minted
    /// by hand will not resolve.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
