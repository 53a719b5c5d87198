//! Parameter-reading condition leaves.

use trellis_value::Value;

use crate::condition::number::{NumberCondition, NumericKind};
use crate::condition::ConditionError;
use crate::core::{ParameterEntry, ParameterId, ParameterRegistry};

/// The kind-specific test a parameter leaf applies to the current value
#[derive(Debug, Clone)]
pub enum ParameterTest {
    /// True iff the string value is a member of the configured value set
    String {
        /// Values the parameter is compared against
        values: Vec<String>,
    },

    /// Number condition over an integer parameter
    IntegerNumber(NumberCondition<i64>),

    /// Number condition over a float parameter
    FloatNumber(NumberCondition<f64>),

    /// The boolean value of the parameter directly
    Bool,
}

/// A condition leaf that examines the value of one parameter entry.
///
/// `when_equals` sets the polarity: the leaf is true when the raw evaluation
/// of the parameter matches it. With `when_equals = false` the leaf is true
/// exactly when the raw evaluation is false.
#[derive(Debug, Clone)]
pub struct ParameterCondition {
    param: ParameterId,
    when_equals: bool,
    test: ParameterTest,
}

impl ParameterCondition {
    /// Construct a string condition.
    ///
    /// True (before polarity) iff the parameter's string value is one of
    /// `values`. Fails if `param` is not registered.
    pub fn string(
        registry: &ParameterRegistry,
        param: ParameterId,
        values: Vec<String>,
        when_equals: bool,
    ) -> Result<Self, ConditionError> {
        registry.resolve(param)?;
        Ok(Self {
            param,
            when_equals,
            test: ParameterTest::String { values },
        })
    }

    /// Construct a bool condition over a boolean parameter.
    ///
    /// Fails if `param` is not registered.
    pub fn bool(
        registry: &ParameterRegistry,
        param: ParameterId,
        when_equals: bool,
    ) -> Result<Self, ConditionError> {
        registry.resolve(param)?;
        Ok(Self {
            param,
            when_equals,
            test: ParameterTest::Bool,
        })
    }

    /// Construct a number condition with the identity transform.
    ///
    /// Fails if `param` is not registered, is not of a numeric kind, or its
    /// numeric kind does not match `T`.
    pub fn number<T: NumericKind>(
        registry: &ParameterRegistry,
        param: ParameterId,
        when_equals: bool,
    ) -> Result<Self, ConditionError> {
        Self::from_number_condition(registry, param, NumberCondition::<T>::new(), when_equals)
    }

    /// Construct a number condition that runs `transform` over the value first
    pub fn number_with_transform<T: NumericKind>(
        registry: &ParameterRegistry,
        param: ParameterId,
        transform: fn(T) -> T,
        when_equals: bool,
    ) -> Result<Self, ConditionError> {
        Self::from_number_condition(
            registry,
            param,
            NumberCondition::with_transform(transform),
            when_equals,
        )
    }

    fn from_number_condition<T: NumericKind>(
        registry: &ParameterRegistry,
        param: ParameterId,
        condition: NumberCondition<T>,
        when_equals: bool,
    ) -> Result<Self, ConditionError> {
        let entry = registry.resolve(param)?;
        let actual = entry.kind();
        if !actual.is_numeric() {
            return Err(ConditionError::NonNumericParameter { id: param, actual });
        }
        if actual != T::KIND {
            return Err(ConditionError::NumericKindMismatch {
                id: param,
                expected: T::KIND,
                actual,
            });
        }
        Ok(Self {
            param,
            when_equals,
            test: T::into_test(condition),
        })
    }

    /// The parameter this leaf reads
    pub fn param(&self) -> ParameterId {
        self.param
    }

    /// The polarity flag
    pub fn when_equals(&self) -> bool {
        self.when_equals
    }

    /// The kind-specific test
    pub fn test(&self) -> &ParameterTest {
        &self.test
    }

    /// Raw evaluation of the parameter's current value, before polarity
    pub fn evaluate_parameter(&self, entry: &ParameterEntry) -> bool {
        self.evaluate_value(entry.value())
    }

    fn evaluate_value(&self, value: &Value) -> bool {
        match &self.test {
            ParameterTest::String { values } => match value.as_str() {
                Some(current) => values.iter().any(|v| v == current),
                None => false,
            },
            ParameterTest::IntegerNumber(cond) => cond.evaluate(value),
            ParameterTest::FloatNumber(cond) => cond.evaluate(value),
            ParameterTest::Bool => value.as_boolean().unwrap_or(false),
        }
    }

    /// Evaluate this leaf over the current parameter state.
    ///
    /// True when the raw evaluation matches the requested polarity. A
    /// parameter missing from the registry evaluates to `false` regardless
    /// of polarity.
    pub fn is_true(&self, params: &ParameterRegistry) -> bool {
        match params.get(self.param) {
            Some(entry) => self.evaluate_parameter(entry) == self.when_equals,
            None => false,
        }
    }

    /// Stable type tag used exclusively by the markup converter
    pub fn type_tag(&self) -> &'static str {
        match &self.test {
            ParameterTest::String { .. } => "stringCondition",
            ParameterTest::IntegerNumber(_) => "integerNumberCondition",
            ParameterTest::FloatNumber(_) => "floatNumberCondition",
            ParameterTest::Bool => "boolCondition",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParameterKey;
    use trellis_value::ValueKind;

    fn key(s: &str) -> ParameterKey {
        ParameterKey::new(s).unwrap()
    }

    #[test]
    fn test_string_membership() {
        let mut registry = ParameterRegistry::new();
        let id = registry.insert(key("Solver"), Value::text("a")).unwrap();

        let cond = ParameterCondition::string(
            &registry,
            id,
            vec!["a".to_string(), "b".to_string()],
            true,
        )
        .unwrap();

        assert!(cond.is_true(&registry));
        registry.set_value(id, Value::text("b")).unwrap();
        assert!(cond.is_true(&registry));
        registry.set_value(id, Value::text("c")).unwrap();
        assert!(!cond.is_true(&registry));
    }

    #[test]
    fn test_bool_polarity() {
        let mut registry = ParameterRegistry::new();
        let id = registry.insert(key("Verbose"), Value::boolean(true)).unwrap();

        let when_true = ParameterCondition::bool(&registry, id, true).unwrap();
        let when_false = ParameterCondition::bool(&registry, id, false).unwrap();

        assert!(when_true.is_true(&registry));
        assert!(!when_false.is_true(&registry));

        registry.set_value(id, Value::boolean(false)).unwrap();
        assert!(!when_true.is_true(&registry));
        assert!(when_false.is_true(&registry));
    }

    #[test]
    fn test_string_polarity_inverts_membership() {
        let mut registry = ParameterRegistry::new();
        let id = registry.insert(key("Mode"), Value::text("exact")).unwrap();

        let not_exact =
            ParameterCondition::string(&registry, id, vec!["exact".to_string()], false).unwrap();

        assert!(!not_exact.is_true(&registry));
        registry.set_value(id, Value::text("lumped")).unwrap();
        assert!(not_exact.is_true(&registry));
    }

    #[test]
    fn test_number_over_integer() {
        let mut registry = ParameterRegistry::new();
        let id = registry.insert(key("Levels"), Value::integer(3)).unwrap();

        let cond = ParameterCondition::number::<i64>(&registry, id, true).unwrap();
        assert!(cond.is_true(&registry));

        registry.set_value(id, Value::integer(0)).unwrap();
        assert!(!cond.is_true(&registry));
    }

    #[test]
    fn test_number_over_text_fails() {
        let mut registry = ParameterRegistry::new();
        let id = registry.insert(key("Name"), Value::text("x")).unwrap();

        let err = ParameterCondition::number::<i64>(&registry, id, true).unwrap_err();
        assert_eq!(
            err,
            ConditionError::NonNumericParameter {
                id,
                actual: ValueKind::Text
            }
        );
    }

    #[test]
    fn test_number_kind_must_match() {
        let mut registry = ParameterRegistry::new();
        let id = registry.insert(key("Tol"), Value::float(0.1)).unwrap();

        let err = ParameterCondition::number::<i64>(&registry, id, true).unwrap_err();
        assert_eq!(
            err,
            ConditionError::NumericKindMismatch {
                id,
                expected: ValueKind::Integer,
                actual: ValueKind::Float,
            }
        );
        assert!(ParameterCondition::number::<f64>(&registry, id, true).is_ok());
    }

    #[test]
    fn test_unregistered_parameter_rejected_at_construction() {
        let registry = ParameterRegistry::new();
        let ghost = ParameterId::from_raw(7);
        assert!(ParameterCondition::bool(&registry, ghost, true).is_err());
    }

    #[test]
    fn test_transform_with_polarity() {
        let mut registry = ParameterRegistry::new();
        let id = registry.insert(key("Offset"), Value::float(2.0)).unwrap();

        // true (before polarity) iff value - 1.0 > 0
        let cond =
            ParameterCondition::number_with_transform::<f64>(&registry, id, |x| x - 1.0, false)
                .unwrap();

        assert!(!cond.is_true(&registry));
        registry.set_value(id, Value::float(0.5)).unwrap();
        assert!(cond.is_true(&registry));
    }
}
