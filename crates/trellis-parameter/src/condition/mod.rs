//! Condition trees for conditional parameter state.
//!
//! A [`Condition`] is a stateless boolean expression over the current values
//! of parameter entries. Leaves ([`ParameterCondition`]) read a single entry
//! through the registry; interior nodes combine child conditions with a
//! logical operator or negate a single child.
//!
//! Trees are re-evaluated on demand and never cached: parameter values may
//! change between calls, and a stale answer would silently enable or hide
//! the wrong parameters.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use trellis_parameter::condition::{Condition, ConditionList, ParameterCondition};
//! use trellis_parameter::core::{ParameterKey, ParameterRegistry};
//! use trellis_value::Value;
//!
//! let mut registry = ParameterRegistry::new();
//! let solver = registry
//!     .insert(ParameterKey::new("Solver").unwrap(), Value::text("GMRES"))
//!     .unwrap();
//!
//! let uses_krylov = ParameterCondition::string(
//!     &registry,
//!     solver,
//!     vec!["GMRES".to_string(), "CG".to_string()],
//!     true,
//! ).unwrap();
//!
//! let condition = Condition::from(uses_krylov);
//! assert!(condition.is_true(&registry));
//! ```

mod list;
mod number;
mod parameter;

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use trellis_value::ValueKind;

use crate::core::{ParameterError, ParameterId, ParameterRegistry};

pub use list::ConditionList;
pub use number::{NumberCondition, NumericKind};
pub use parameter::{ParameterCondition, ParameterTest};

/// Error raised when a condition cannot be constructed.
///
/// Construction is the only place a condition can fail; evaluation of a
/// constructed condition is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    /// A logical condition was given no children to combine
    #[error("A logical condition requires at least one child condition")]
    EmptyConditionList,

    /// A number condition referenced a parameter of non-numeric kind
    #[error("Parameter {id} of a number condition must be numeric, got {actual}")]
    NonNumericParameter {
        /// The offending parameter
        id: ParameterId,
        /// Its declared kind
        actual: ValueKind,
    },

    /// A number condition's numeric kind does not match the parameter's
    #[error("Number condition over parameter {id} expects {expected}, got {actual}")]
    NumericKindMismatch {
        /// The offending parameter
        id: ParameterId,
        /// Kind required by the condition's type parameter
        expected: ValueKind,
        /// The parameter's declared kind
        actual: ValueKind,
    },

    /// The referenced parameter does not exist in the registry
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// The two-operand boolean operator of a logical condition
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    /// True if either operand is true
    Or,
    /// True if both operands are true
    And,
    /// True if both operands agree; folded pairwise, this realises
    /// "all children's boolean results are mutually equal"
    Equals,
}

impl LogicalOp {
    /// Apply the operator to two operands
    pub const fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Self::Or => a || b,
            Self::And => a && b,
            Self::Equals => a == b,
        }
    }

    /// Stable type tag used by the markup converter
    pub const fn type_tag(self) -> &'static str {
        match self {
            Self::Or => "orCondition",
            Self::And => "andCondition",
            Self::Equals => "equalsCondition",
        }
    }
}

/// A node in a condition tree.
///
/// Children are held through `Arc`, so a subtree may be shared between
/// several parents (the tree is a DAG over parameters; parameters are
/// leaves and are never owned by conditions).
#[derive(Debug, Clone)]
pub enum Condition {
    /// An ordered list of children reduced left-to-right with a logical operator
    Logical {
        /// The operator applied pairwise across the list
        op: LogicalOp,
        /// The children; guaranteed non-empty
        children: ConditionList,
    },

    /// Negation of a single child
    Not(Arc<Condition>),

    /// A leaf reading one parameter entry
    Parameter(ParameterCondition),
}

impl Condition {
    /// Combine children with logical OR
    pub fn or(children: ConditionList) -> Self {
        Self::Logical {
            op: LogicalOp::Or,
            children,
        }
    }

    /// Combine children with logical AND
    pub fn and(children: ConditionList) -> Self {
        Self::Logical {
            op: LogicalOp::And,
            children,
        }
    }

    /// True when all children agree
    pub fn equals(children: ConditionList) -> Self {
        Self::Logical {
            op: LogicalOp::Equals,
            children,
        }
    }

    /// Negate a condition
    pub fn not(child: Arc<Condition>) -> Self {
        Self::Not(child)
    }

    /// Evaluate this condition over the current parameter state.
    ///
    /// Total and side-effect free. A leaf whose parameter has been removed
    /// from the registry evaluates to `false`; keeping entries alive for as
    /// long as conditions reference them is the caller's responsibility.
    pub fn is_true(&self, params: &ParameterRegistry) -> bool {
        match self {
            Self::Logical { op, children } => children
                .iter()
                .map(|child| child.is_true(params))
                .reduce(|acc, b| op.apply(acc, b))
                .unwrap_or_else(|| unreachable!("ConditionList is never empty")),
            Self::Not(child) => !child.is_true(params),
            Self::Parameter(leaf) => leaf.is_true(params),
        }
    }

    /// Whether this (sub)tree references at least one parameter entry.
    ///
    /// Used by dependency validation: a dependency whose condition reads no
    /// parameter can never change state.
    pub fn contains_at_least_one_parameter(&self) -> bool {
        match self {
            Self::Logical { children, .. } => children
                .iter()
                .any(|child| child.contains_at_least_one_parameter()),
            Self::Not(child) => child.contains_at_least_one_parameter(),
            Self::Parameter(_) => true,
        }
    }

    /// Collect every parameter referenced from this node, deduplicated by identity
    pub fn all_parameters(&self) -> BTreeSet<ParameterId> {
        let mut out = BTreeSet::new();
        self.collect_parameters(&mut out);
        out
    }

    fn collect_parameters(&self, out: &mut BTreeSet<ParameterId>) {
        match self {
            Self::Logical { children, .. } => {
                for child in children.iter() {
                    child.collect_parameters(out);
                }
            }
            Self::Not(child) => child.collect_parameters(out),
            Self::Parameter(leaf) => {
                out.insert(leaf.param());
            }
        }
    }

    /// Stable type tag used exclusively by the markup converter
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Logical { op, .. } => op.type_tag(),
            Self::Not(_) => "notCondition",
            Self::Parameter(leaf) => leaf.type_tag(),
        }
    }
}

impl From<ParameterCondition> for Condition {
    fn from(leaf: ParameterCondition) -> Self {
        Self::Parameter(leaf)
    }
}
