//! Condition tree <-> markup element conversion.
//!
//! Each node becomes a `<Condition>` element whose `type` attribute carries
//! the node's stable type tag; interior nodes nest their children as
//! condition elements, parameter leaves carry the referenced entry's
//! persistent identifier and polarity as attributes.
//!
//! Number-condition transforms are plain function pointers and have no
//! markup form; they are dropped on serialization.

use std::sync::Arc;

use crate::condition::{Condition, ConditionList, ParameterCondition, ParameterTest};
use crate::core::ParameterRegistry;
use crate::markup::{
    parse_bool_attribute, parse_param_id, Element, MarkupError, CONDITION_TAG, PARAM_ID_ATTR,
    TYPE_ATTR, VALUE_ATTR, VALUE_TAG, WHEN_EQUALS_ATTR,
};

/// Serialize a condition tree to a markup element
pub fn condition_to_element(condition: &Condition) -> Element {
    let mut element = Element::new(CONDITION_TAG).with_attribute(TYPE_ATTR, condition.type_tag());

    match condition {
        Condition::Logical { children, .. } => {
            for child in children {
                element.add_child(condition_to_element(child));
            }
        }
        Condition::Not(child) => {
            element.add_child(condition_to_element(child));
        }
        Condition::Parameter(leaf) => {
            element.set_attribute(PARAM_ID_ATTR, leaf.param().as_u64().to_string());
            element.set_attribute(WHEN_EQUALS_ATTR, leaf.when_equals().to_string());
            if let ParameterTest::String { values } = leaf.test() {
                for value in values {
                    element.add_child(Element::new(VALUE_TAG).with_attribute(VALUE_ATTR, value));
                }
            }
        }
    }

    element
}

/// Reconstruct a condition tree from a markup element.
///
/// Parameter identifiers are resolved through `registry`; reconstruction
/// re-runs every construction-time validation, so a tree that deserializes
/// successfully is as well-formed as one built directly.
pub fn element_to_condition(
    element: &Element,
    registry: &ParameterRegistry,
) -> Result<Arc<Condition>, MarkupError> {
    let type_tag = element.require_attribute(TYPE_ATTR)?;

    let condition = match type_tag {
        "orCondition" => Condition::or(child_list(element, registry)?),
        "andCondition" => Condition::and(child_list(element, registry)?),
        "equalsCondition" => Condition::equals(child_list(element, registry)?),
        "notCondition" => {
            let child = element
                .find_first_child(CONDITION_TAG)
                .ok_or_else(|| MarkupError::MissingConditionChild {
                    tag: element.tag().to_string(),
                })?;
            Condition::not(element_to_condition(child, registry)?)
        }
        "stringCondition" => {
            let param = parse_param_id(element)?;
            let when_equals = parse_bool_attribute(element, WHEN_EQUALS_ATTR)?;
            let values = element
                .children_tagged(VALUE_TAG)
                .map(|child| Ok(child.require_attribute(VALUE_ATTR)?.to_string()))
                .collect::<Result<Vec<_>, MarkupError>>()?;
            Condition::from(ParameterCondition::string(
                registry, param, values, when_equals,
            )?)
        }
        "boolCondition" => {
            let param = parse_param_id(element)?;
            let when_equals = parse_bool_attribute(element, WHEN_EQUALS_ATTR)?;
            Condition::from(ParameterCondition::bool(registry, param, when_equals)?)
        }
        "integerNumberCondition" => {
            let param = parse_param_id(element)?;
            let when_equals = parse_bool_attribute(element, WHEN_EQUALS_ATTR)?;
            Condition::from(ParameterCondition::number::<i64>(
                registry, param, when_equals,
            )?)
        }
        "floatNumberCondition" => {
            let param = parse_param_id(element)?;
            let when_equals = parse_bool_attribute(element, WHEN_EQUALS_ATTR)?;
            Condition::from(ParameterCondition::number::<f64>(
                registry, param, when_equals,
            )?)
        }
        other => {
            return Err(MarkupError::UnknownTypeTag {
                tag: other.to_string(),
            })
        }
    };

    Ok(Arc::new(condition))
}

fn child_list(
    element: &Element,
    registry: &ParameterRegistry,
) -> Result<ConditionList, MarkupError> {
    let children = element
        .children_tagged(CONDITION_TAG)
        .map(|child| element_to_condition(child, registry))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ConditionList::new(children)?)
}
