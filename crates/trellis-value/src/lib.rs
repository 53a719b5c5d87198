//! # Trellis Value
//!
//! Scalar value types for Trellis parameter trees.
//!
//! A [`Value`] is the tagged payload of a single configuration parameter:
//! a boolean, an integer, a float, or a piece of text. [`ValueKind`] is the
//! lightweight classification used for type checks at condition-construction
//! time, before any value is read.
//!
//! ## Usage
//!
//! ```rust
//! use trellis_value::{Value, ValueKind};
//!
//! let v = Value::integer(42);
//! assert_eq!(v.kind(), ValueKind::Integer);
//! assert!(v.kind().is_numeric());
//! assert_eq!(v.as_integer(), Some(42));
//! ```

pub mod error;
pub mod kind;
pub mod value;

pub use error::ValueError;
pub use kind::ValueKind;
pub use value::Value;

/// Result type used throughout trellis-value
pub type Result<T> = std::result::Result<T, ValueError>;
