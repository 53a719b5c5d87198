//! Dependencies between parameters.
//!
//! A [`Dependency`] ties a set of dependee parameters (the triggers, read by
//! its condition) to a set of dependent parameters (the targets) whose
//! visible or active state follows the condition's outcome. The embedding
//! configuration system re-evaluates a dependency whenever one of its
//! dependees changes.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use crate::condition::Condition;
use crate::core::{ParameterId, ParameterRegistry};

/// Error raised when a dependency cannot be constructed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    /// The condition references no parameter, so the dependency could never fire
    #[error("A dependency's condition must reference at least one parameter")]
    NoParameterReference,

    /// No dependent parameters were given
    #[error("A dependency requires at least one dependent parameter")]
    MissingDependents,
}

/// What a dependency controls on its dependents
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DependencyEffect {
    /// Dependents are shown when the condition's outcome equals `show_if`
    Visibility {
        /// Polarity between condition outcome and visibility
        show_if: bool,
    },

    /// Dependents are active when the condition's outcome equals `activate_if`
    Activation {
        /// Polarity between condition outcome and active state
        activate_if: bool,
    },
}

impl DependencyEffect {
    /// Stable type tag used exclusively by the markup converter
    pub const fn type_tag(self) -> &'static str {
        match self {
            Self::Visibility { .. } => "visualDependency",
            Self::Activation { .. } => "activationDependency",
        }
    }
}

/// A condition-driven dependency between parameters.
///
/// Immutable after construction. Dependees are derived from the condition's
/// parameter set, so the two can never disagree.
#[derive(Debug, Clone)]
pub struct Dependency {
    dependees: BTreeSet<ParameterId>,
    dependents: BTreeSet<ParameterId>,
    condition: Arc<Condition>,
    effect: DependencyEffect,
}

impl Dependency {
    /// Create a visibility dependency: dependents are shown when the
    /// condition's outcome equals `show_if`.
    pub fn visibility(
        condition: Arc<Condition>,
        dependents: BTreeSet<ParameterId>,
        show_if: bool,
    ) -> Result<Self, DependencyError> {
        Self::new(condition, dependents, DependencyEffect::Visibility { show_if })
    }

    /// Create an activation dependency: dependents are active when the
    /// condition's outcome equals `activate_if`.
    pub fn activation(
        condition: Arc<Condition>,
        dependents: BTreeSet<ParameterId>,
        activate_if: bool,
    ) -> Result<Self, DependencyError> {
        Self::new(
            condition,
            dependents,
            DependencyEffect::Activation { activate_if },
        )
    }

    fn new(
        condition: Arc<Condition>,
        dependents: BTreeSet<ParameterId>,
        effect: DependencyEffect,
    ) -> Result<Self, DependencyError> {
        let dependees = condition.all_parameters();
        if dependees.is_empty() {
            return Err(DependencyError::NoParameterReference);
        }
        if dependents.is_empty() {
            return Err(DependencyError::MissingDependents);
        }
        Ok(Self {
            dependees,
            dependents,
            condition,
            effect,
        })
    }

    /// The trigger parameters, keyed by identity
    pub fn dependees(&self) -> &BTreeSet<ParameterId> {
        &self.dependees
    }

    /// The target parameters, keyed by identity
    pub fn dependents(&self) -> &BTreeSet<ParameterId> {
        &self.dependents
    }

    /// The condition evaluated over the dependees
    pub fn condition(&self) -> &Arc<Condition> {
        &self.condition
    }

    /// What this dependency controls
    pub fn effect(&self) -> DependencyEffect {
        self.effect
    }

    /// Stable type tag used exclusively by the markup converter
    pub fn type_tag(&self) -> &'static str {
        self.effect.type_tag()
    }

    /// Evaluate the dependency over the current parameter state.
    ///
    /// Returns whether the dependents should be visible (for a visibility
    /// dependency) or active (for an activation dependency).
    pub fn evaluate(&self, params: &ParameterRegistry) -> bool {
        let outcome = self.condition.is_true(params);
        match self.effect {
            DependencyEffect::Visibility { show_if } => outcome == show_if,
            DependencyEffect::Activation { activate_if } => outcome == activate_if,
        }
    }

    /// Whether the dependents should be visible.
    ///
    /// `None` when this dependency controls activation, not visibility.
    pub fn is_dependent_visible(&self, params: &ParameterRegistry) -> Option<bool> {
        match self.effect {
            DependencyEffect::Visibility { .. } => Some(self.evaluate(params)),
            DependencyEffect::Activation { .. } => None,
        }
    }

    /// Whether the dependents should be active.
    ///
    /// `None` when this dependency controls visibility, not activation.
    pub fn is_dependent_active(&self, params: &ParameterRegistry) -> Option<bool> {
        match self.effect {
            DependencyEffect::Activation { .. } => Some(self.evaluate(params)),
            DependencyEffect::Visibility { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{ConditionList, ParameterCondition};
    use crate::core::ParameterKey;
    use trellis_value::Value;

    fn key(s: &str) -> ParameterKey {
        ParameterKey::new(s).unwrap()
    }

    fn setup() -> (ParameterRegistry, ParameterId, ParameterId) {
        let mut registry = ParameterRegistry::new();
        let trigger = registry
            .insert(key("Use Preconditioner"), Value::boolean(true))
            .unwrap();
        let target = registry
            .insert(key("Preconditioner Type"), Value::text("ILU"))
            .unwrap();
        (registry, trigger, target)
    }

    #[test]
    fn test_dependees_derived_from_condition() {
        let (registry, trigger, target) = setup();
        let condition = Arc::new(Condition::from(
            ParameterCondition::bool(&registry, trigger, true).unwrap(),
        ));

        let dep =
            Dependency::visibility(condition, BTreeSet::from([target]), true).unwrap();

        assert_eq!(dep.dependees(), &BTreeSet::from([trigger]));
        assert_eq!(dep.dependents(), &BTreeSet::from([target]));
        assert_eq!(dep.type_tag(), "visualDependency");
    }

    #[test]
    fn test_visibility_follows_condition() {
        let (mut registry, trigger, target) = setup();
        let condition = Arc::new(Condition::from(
            ParameterCondition::bool(&registry, trigger, true).unwrap(),
        ));
        let dep = Dependency::visibility(condition, BTreeSet::from([target]), true).unwrap();

        assert!(dep.evaluate(&registry));
        registry.set_value(trigger, Value::boolean(false)).unwrap();
        assert!(!dep.evaluate(&registry));
    }

    #[test]
    fn test_show_if_polarity() {
        let (registry, trigger, target) = setup();
        let condition = Arc::new(Condition::from(
            ParameterCondition::bool(&registry, trigger, true).unwrap(),
        ));
        let dep = Dependency::visibility(condition, BTreeSet::from([target]), false).unwrap();

        // Condition is true, show_if is false: dependents hidden.
        assert!(!dep.evaluate(&registry));
    }

    #[test]
    fn test_activation_effect() {
        let (mut registry, trigger, target) = setup();
        let condition = Arc::new(Condition::from(
            ParameterCondition::bool(&registry, trigger, true).unwrap(),
        ));
        let dep = Dependency::activation(condition, BTreeSet::from([target]), true).unwrap();

        assert_eq!(dep.type_tag(), "activationDependency");
        assert!(dep.evaluate(&registry));
        registry.set_value(trigger, Value::boolean(false)).unwrap();
        assert!(!dep.evaluate(&registry));
    }

    #[test]
    fn test_effect_specific_accessors() {
        let (registry, trigger, target) = setup();
        let condition = Arc::new(Condition::from(
            ParameterCondition::bool(&registry, trigger, true).unwrap(),
        ));
        let dep =
            Dependency::visibility(condition, BTreeSet::from([target]), true).unwrap();

        assert_eq!(dep.is_dependent_visible(&registry), Some(true));
        assert_eq!(dep.is_dependent_active(&registry), None);
    }

    #[test]
    fn test_no_dependents_rejected() {
        let (registry, trigger, _target) = setup();
        let condition = Arc::new(Condition::from(
            ParameterCondition::bool(&registry, trigger, true).unwrap(),
        ));
        assert_eq!(
            Dependency::visibility(condition, BTreeSet::new(), true).unwrap_err(),
            DependencyError::MissingDependents
        );
    }

    #[test]
    fn test_multi_dependee_condition() {
        let (registry, trigger, target) = setup();
        let mut registry = registry;
        let second = registry
            .insert(key("Levels"), Value::integer(2))
            .unwrap();

        let list = ConditionList::new(vec![
            Arc::new(Condition::from(
                ParameterCondition::bool(&registry, trigger, true).unwrap(),
            )),
            Arc::new(Condition::from(
                ParameterCondition::number::<i64>(&registry, second, true).unwrap(),
            )),
        ])
        .unwrap();
        let condition = Arc::new(Condition::and(list));

        let dep = Dependency::visibility(condition, BTreeSet::from([target]), true).unwrap();
        assert_eq!(dep.dependees(), &BTreeSet::from([trigger, second]));
        assert!(dep.evaluate(&registry));
    }
}
