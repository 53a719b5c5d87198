//! Unified Value enum covering the scalar kinds a parameter can hold.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::kind::ValueKind;

/// A single scalar configuration value.
///
/// Equality is exact per kind: `Integer(1)` and `Float(1.0)` are not equal.
/// Comparison across kinds is a caller concern (see `as_float_lossy`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    /// Boolean value
    Boolean(bool),

    /// Integer number (i64)
    Integer(i64),

    /// Floating point number (f64)
    Float(f64),

    /// UTF-8 text string
    Text(String),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create an integer value
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// Create a float value
    pub const fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Check if this value is of a numeric kind
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    // ==================== Accessors ====================

    /// Get the boolean payload, if this is a boolean
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer payload, if this is an integer
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float payload, if this is a float
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the text payload, if this is text
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Get any numeric payload widened to f64
    ///
    /// Integers above 2^53 lose precision; the condition subsystem only uses
    /// this for sign tests and range checks where that is acceptable.
    #[must_use]
    pub const fn as_float_lossy(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    // ==================== Checked coercions ====================

    /// Get the boolean payload or a type-mismatch error
    pub fn try_boolean(&self) -> Result<bool, ValueError> {
        self.as_boolean()
            .ok_or_else(|| ValueError::type_mismatch(ValueKind::Boolean, self.kind()))
    }

    /// Get the integer payload or a type-mismatch error
    pub fn try_integer(&self) -> Result<i64, ValueError> {
        self.as_integer()
            .ok_or_else(|| ValueError::type_mismatch(ValueKind::Integer, self.kind()))
    }

    /// Get the float payload or a type-mismatch error
    pub fn try_float(&self) -> Result<f64, ValueError> {
        self.as_float()
            .ok_or_else(|| ValueError::type_mismatch(ValueKind::Float, self.kind()))
    }

    /// Get the text payload or a type-mismatch error
    pub fn try_str(&self) -> Result<&str, ValueError> {
        self.as_str()
            .ok_or_else(|| ValueError::type_mismatch(ValueKind::Text, self.kind()))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() && fl.is_sign_positive() {
                    write!(f, "+Infinity")
                } else if fl.is_infinite() {
                    write!(f, "-Infinity")
                } else {
                    write!(f, "{fl}")
                }
            }
            Self::Text(t) => f.write_str(t),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Value::boolean(true).kind(), ValueKind::Boolean);
        assert_eq!(Value::integer(1).kind(), ValueKind::Integer);
        assert_eq!(Value::float(1.0).kind(), ValueKind::Float);
        assert_eq!(Value::text("x").kind(), ValueKind::Text);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::integer(42).as_integer(), Some(42));
        assert_eq!(Value::integer(42).as_float(), None);
        assert_eq!(Value::text("hi").as_str(), Some("hi"));
        assert_eq!(Value::boolean(false).as_boolean(), Some(false));
    }

    #[test]
    fn test_as_float_lossy() {
        assert_eq!(Value::integer(3).as_float_lossy(), Some(3.0));
        assert_eq!(Value::float(2.5).as_float_lossy(), Some(2.5));
        assert_eq!(Value::text("3").as_float_lossy(), None);
        assert_eq!(Value::boolean(true).as_float_lossy(), None);
    }

    #[test]
    fn test_cross_kind_equality() {
        assert_ne!(Value::integer(1), Value::float(1.0));
        assert_ne!(Value::text("1"), Value::integer(1));
        assert_eq!(Value::integer(1), Value::integer(1));
    }

    #[test]
    fn test_try_accessors_name_actual_kind() {
        let err = Value::text("oops").try_integer().unwrap_err();
        assert_eq!(
            err,
            ValueError::type_mismatch(ValueKind::Integer, ValueKind::Text)
        );
        assert!(err.to_string().contains("integer"));
        assert!(err.to_string().contains("text"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::boolean(true).to_string(), "true");
        assert_eq!(Value::integer(-7).to_string(), "-7");
        assert_eq!(Value::text("abc").to_string(), "abc");
        assert_eq!(Value::float(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Value::text("api_key");
        let json = serde_json::to_string(&v).expect("serialize");
        let back: Value = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(v, back);
    }
}
