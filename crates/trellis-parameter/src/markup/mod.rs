//! Markup conversion for conditions and dependencies.
//!
//! Bidirectional mapping between the in-memory object graphs of this crate
//! and a generic tagged-tree representation ([`Element`]). Serialization
//! walks the object graph; deserialization resolves parameter identifiers
//! through a [`ParameterRegistry`](crate::core::ParameterRegistry) — the
//! converters never create parameter entries, only reference them.

mod condition;
mod dependency;
mod element;

use thiserror::Error;

use crate::condition::ConditionError;
use crate::core::{ParameterError, ParameterId};
use crate::dependency::DependencyError;

pub use condition::{condition_to_element, element_to_condition};
pub use dependency::{dependency_to_element, element_to_dependency};
pub use element::Element;

/// Root tag of a serialized dependency
pub const DEPENDENCY_TAG: &str = "Dependency";
/// Tag of one dependee child element
pub const DEPENDEE_TAG: &str = "Dependee";
/// Tag of one dependent child element
pub const DEPENDENT_TAG: &str = "Dependent";
/// Tag of a serialized condition node
pub const CONDITION_TAG: &str = "Condition";
/// Tag of one member of a string condition's value set
pub const VALUE_TAG: &str = "Value";

/// Attribute holding a parameter's persistent identifier
pub const PARAM_ID_ATTR: &str = "paramId";
/// Attribute selecting the concrete condition or dependency kind
pub const TYPE_ATTR: &str = "type";
/// Attribute holding a parameter condition's polarity flag
pub const WHEN_EQUALS_ATTR: &str = "whenParamEqualsValue";
/// Attribute holding a visibility dependency's polarity
pub const SHOW_IF_ATTR: &str = "showIf";
/// Attribute holding an activation dependency's polarity
pub const ACTIVATE_IF_ATTR: &str = "activateIf";
/// Attribute holding one string-condition value
pub const VALUE_ATTR: &str = "value";

/// Error raised by markup conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A dependency element had no dependee children
    #[error("Could not find any dependees for a dependency")]
    MissingDependees,

    /// A dependency element had no dependent children
    #[error("Could not find any dependents for a dependency")]
    MissingDependents,

    /// A parameter identifier did not resolve through the registry
    #[error("Markup references unknown parameter id {id}")]
    UnknownParameterId {
        /// The unresolved identifier
        id: ParameterId,
    },

    /// The type attribute named a kind this converter does not know
    #[error("Unknown type tag: {tag:?}")]
    UnknownTypeTag {
        /// The unrecognized tag value
        tag: String,
    },

    /// A required attribute was absent
    #[error("Element <{tag}> is missing required attribute {attribute:?}")]
    MissingAttribute {
        /// Tag of the offending element
        tag: String,
        /// Name of the absent attribute
        attribute: String,
    },

    /// An attribute value could not be parsed
    #[error("Element <{tag}> has invalid {attribute:?} value {value:?}")]
    InvalidAttribute {
        /// Tag of the offending element
        tag: String,
        /// Name of the attribute
        attribute: String,
        /// The rejected value
        value: String,
    },

    /// An element that requires a condition child had none
    #[error("Element <{tag}> is missing its condition child")]
    MissingConditionChild {
        /// Tag of the offending element
        tag: String,
    },

    /// The listed dependees disagree with the condition's parameter set
    #[error("Dependee elements do not match the parameters referenced by the condition")]
    DependeeConditionMismatch,

    /// Reconstructing a condition failed its construction validation
    #[error(transparent)]
    Condition(#[from] ConditionError),

    /// Reconstructing a dependency failed its construction validation
    #[error(transparent)]
    Dependency(#[from] DependencyError),
}

impl From<ParameterError> for MarkupError {
    fn from(err: ParameterError) -> Self {
        match err {
            ParameterError::UnknownParameter { id } => Self::UnknownParameterId { id },
            other => Self::Condition(ConditionError::Parameter(other)),
        }
    }
}

fn parse_bool_attribute(element: &Element, attribute: &str) -> Result<bool, MarkupError> {
    let raw = element.require_attribute(attribute)?;
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(MarkupError::InvalidAttribute {
            tag: element.tag().to_string(),
            attribute: attribute.to_string(),
            value: other.to_string(),
        }),
    }
}

fn parse_param_id(element: &Element) -> Result<ParameterId, MarkupError> {
    let raw = element.require_attribute(PARAM_ID_ATTR)?;
    raw.parse::<u64>()
        .map(ParameterId::from_raw)
        .map_err(|_| MarkupError::InvalidAttribute {
            tag: element.tag().to_string(),
            attribute: PARAM_ID_ATTR.to_string(),
            value: raw.to_string(),
        })
}
