//! Dependency <-> markup element conversion.
//!
//! The root element is tagged `Dependency` with a `type` attribute selecting
//! the concrete kind; one `Dependee` child per trigger parameter and one
//! `Dependent` child per target parameter, each carrying the parameter's
//! persistent identifier; kind-specific attributes and the condition child
//! follow.

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::ParameterRegistry;
use crate::dependency::{Dependency, DependencyEffect};
use crate::markup::condition::{condition_to_element, element_to_condition};
use crate::markup::{
    parse_bool_attribute, parse_param_id, Element, MarkupError, ACTIVATE_IF_ATTR, CONDITION_TAG,
    DEPENDEE_TAG, DEPENDENCY_TAG, DEPENDENT_TAG, PARAM_ID_ATTR, SHOW_IF_ATTR, TYPE_ATTR,
};

/// Serialize a dependency to a markup element
pub fn dependency_to_element(dependency: &Dependency) -> Element {
    debug!(kind = dependency.type_tag(), "serializing dependency");
    let mut root =
        Element::new(DEPENDENCY_TAG).with_attribute(TYPE_ATTR, dependency.type_tag());

    for dependee in dependency.dependees() {
        root.add_child(
            Element::new(DEPENDEE_TAG).with_attribute(PARAM_ID_ATTR, dependee.as_u64().to_string()),
        );
    }
    for dependent in dependency.dependents() {
        root.add_child(
            Element::new(DEPENDENT_TAG)
                .with_attribute(PARAM_ID_ATTR, dependent.as_u64().to_string()),
        );
    }

    // Kind-specific trailer: polarity attribute plus the condition child.
    match dependency.effect() {
        DependencyEffect::Visibility { show_if } => {
            root.set_attribute(SHOW_IF_ATTR, show_if.to_string());
        }
        DependencyEffect::Activation { activate_if } => {
            root.set_attribute(ACTIVATE_IF_ATTR, activate_if.to_string());
        }
    }
    root.add_child(condition_to_element(dependency.condition()));

    root
}

/// Reconstruct a dependency from a markup element.
///
/// Requires at least one `Dependee` and one `Dependent` child; resolves
/// every identifier through `registry` and rebuilds the concrete kind named
/// by the `type` attribute.
pub fn element_to_dependency(
    element: &Element,
    registry: &ParameterRegistry,
) -> Result<Dependency, MarkupError> {
    debug!(tag = element.tag(), "deserializing dependency");

    if element.find_first_child(DEPENDEE_TAG).is_none() {
        return Err(MarkupError::MissingDependees);
    }
    if element.find_first_child(DEPENDENT_TAG).is_none() {
        return Err(MarkupError::MissingDependents);
    }

    let mut dependees = BTreeSet::new();
    for child in element.children_tagged(DEPENDEE_TAG) {
        let id = parse_param_id(child)?;
        registry.resolve(id)?;
        dependees.insert(id);
    }

    let mut dependents = BTreeSet::new();
    for child in element.children_tagged(DEPENDENT_TAG) {
        let id = parse_param_id(child)?;
        registry.resolve(id)?;
        dependents.insert(id);
    }

    let condition_element = element
        .find_first_child(CONDITION_TAG)
        .ok_or_else(|| MarkupError::MissingConditionChild {
            tag: element.tag().to_string(),
        })?;
    let condition = element_to_condition(condition_element, registry)?;

    let type_tag = element.require_attribute(TYPE_ATTR)?;
    let dependency = match type_tag {
        "visualDependency" => {
            let show_if = parse_bool_attribute(element, SHOW_IF_ATTR)?;
            Dependency::visibility(condition, dependents, show_if)?
        }
        "activationDependency" => {
            let activate_if = parse_bool_attribute(element, ACTIVATE_IF_ATTR)?;
            Dependency::activation(condition, dependents, activate_if)?
        }
        other => {
            return Err(MarkupError::UnknownTypeTag {
                tag: other.to_string(),
            })
        }
    };

    // The dependee list is derived from the condition at construction; the
    // serialized list must agree or the markup was edited inconsistently.
    if dependency.dependees() != &dependees {
        return Err(MarkupError::DependeeConditionMismatch);
    }

    Ok(dependency)
}
