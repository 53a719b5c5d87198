//! Generic number conditions.
//!
//! A [`NumberCondition`] holds the numeric half of a parameter leaf: an
//! optional transform applied to the current value, whose result must be
//! strictly positive for the raw evaluation to be true. It is a single
//! generic component instantiated once per supported numeric kind.

use trellis_value::{Value, ValueKind};

use crate::condition::parameter::ParameterTest;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// A numeric kind a [`NumberCondition`] can be instantiated over.
///
/// Sealed: the supported kinds are exactly the numeric kinds a
/// [`Value`](trellis_value::Value) can hold.
pub trait NumericKind: Copy + sealed::Sealed {
    /// The value kind this numeric type reads
    const KIND: ValueKind;

    /// Extract a payload of this type from a value, if the kinds match
    fn extract(value: &Value) -> Option<Self>;

    /// Whether this number is strictly greater than zero
    fn is_positive(self) -> bool;

    /// Wrap a number condition of this kind into a parameter test
    fn into_test(condition: NumberCondition<Self>) -> ParameterTest;
}

impl NumericKind for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn extract(value: &Value) -> Option<Self> {
        value.as_integer()
    }

    fn is_positive(self) -> bool {
        self > 0
    }

    fn into_test(condition: NumberCondition<Self>) -> ParameterTest {
        ParameterTest::IntegerNumber(condition)
    }
}

impl NumericKind for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn extract(value: &Value) -> Option<Self> {
        value.as_float()
    }

    fn is_positive(self) -> bool {
        self > 0.0
    }

    fn into_test(condition: NumberCondition<Self>) -> ParameterTest {
        ParameterTest::FloatNumber(condition)
    }
}

/// The numeric test of a number-condition leaf.
///
/// True iff the transform applied to the current value is greater than zero.
/// The transform defaults to identity; it is a plain function pointer and has
/// no markup form, so round-tripping a condition through the markup converter
/// drops it.
#[derive(Debug, Clone)]
pub struct NumberCondition<T: NumericKind> {
    transform: Option<fn(T) -> T>,
}

impl<T: NumericKind> NumberCondition<T> {
    /// Create a number condition with the identity transform
    pub fn new() -> Self {
        Self { transform: None }
    }

    /// Create a number condition that runs `transform` over the value first
    pub fn with_transform(transform: fn(T) -> T) -> Self {
        Self {
            transform: Some(transform),
        }
    }

    /// Whether a transform is set
    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    /// Raw evaluation: transform the current value and test for positivity.
    ///
    /// A value of the wrong kind yields `false`; construction-time kind
    /// checks make that unreachable unless the registry entry was replaced.
    pub fn evaluate(&self, value: &Value) -> bool {
        match T::extract(value) {
            Some(raw) => self.run_transform(raw).is_positive(),
            None => false,
        }
    }

    fn run_transform(&self, argument: T) -> T {
        match self.transform {
            Some(f) => f(argument),
            None => argument,
        }
    }
}

impl<T: NumericKind> Default for NumberCondition<T> {
    fn default() -> Self {
        Self::new()
    }
}
