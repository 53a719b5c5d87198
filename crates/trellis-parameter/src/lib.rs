//! # Trellis Parameter
//!
//! Parameter entries, condition trees, dependencies, and markup conversion
//! for solver configuration.
//!
//! A configuration tree registers its leaves in a
//! [`ParameterRegistry`](core::ParameterRegistry); [`Condition`](condition::Condition)
//! trees evaluate boolean expressions over the current entry values; a
//! [`Dependency`](dependency::Dependency) ties those outcomes to the visible
//! or active state of other parameters; the [`markup`] module round-trips
//! conditions and dependencies through a generic tagged-tree representation
//! for persistence.

pub mod condition;
pub mod core;
pub mod dependency;
pub mod markup;

pub use crate::condition::{
    Condition, ConditionError, ConditionList, LogicalOp, NumberCondition, NumericKind,
    ParameterCondition, ParameterTest,
};
pub use crate::core::{
    KeyParseError, ParameterEntry, ParameterError, ParameterId, ParameterKey, ParameterRegistry,
};
pub use crate::dependency::{Dependency, DependencyEffect, DependencyError};
pub use crate::markup::{
    condition_to_element, dependency_to_element, element_to_condition, element_to_dependency,
    Element, MarkupError,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::condition::{
        Condition, ConditionError, ConditionList, LogicalOp, NumberCondition, NumericKind,
        ParameterCondition, ParameterTest,
    };
    pub use crate::core::{
        KeyParseError, ParameterEntry, ParameterError, ParameterId, ParameterKey,
        ParameterRegistry,
    };
    pub use crate::dependency::{Dependency, DependencyEffect, DependencyError};
    pub use crate::markup::{
        condition_to_element, dependency_to_element, element_to_condition, element_to_dependency,
        Element, MarkupError,
    };

    pub use trellis_value::{Value, ValueKind};
}
