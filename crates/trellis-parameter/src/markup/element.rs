//! Generic tagged-tree representation for persistence.
//!
//! An [`Element`] is the in-memory form of one markup node: a tag name, an
//! ordered list of attribute name/value pairs, and an ordered list of child
//! elements. The textual encoding (XML, or anything else) is the embedding
//! system's concern; the converters in this crate only produce and consume
//! `Element` trees.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::markup::MarkupError;

/// One node of a markup tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    tag: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Element>,
}

impl Element {
    /// Create an element with the given tag and no attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// The tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Builder pattern: set an attribute and return self
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get an attribute value, failing with a named error if absent
    pub fn require_attribute(&self, name: &str) -> Result<&str, MarkupError> {
        self.attribute(name).ok_or_else(|| MarkupError::MissingAttribute {
            tag: self.tag.clone(),
            attribute: name.to_string(),
        })
    }

    /// Iterate over attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builder pattern: append a child and return self
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child element
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// The child elements in order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Find the first child with the given tag
    pub fn find_first_child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Iterate over the children with the given tag, in order
    pub fn children_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.tag == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_keep_insertion_order() {
        let el = Element::new("Dependency")
            .with_attribute("type", "visualDependency")
            .with_attribute("showIf", "true");

        let attrs: Vec<_> = el.attributes().collect();
        assert_eq!(
            attrs,
            vec![("type", "visualDependency"), ("showIf", "true")]
        );
    }

    #[test]
    fn test_require_attribute_names_tag_and_attribute() {
        let el = Element::new("Dependee");
        let err = el.require_attribute("paramId").unwrap_err();
        assert!(err.to_string().contains("Dependee"));
        assert!(err.to_string().contains("paramId"));
    }

    #[test]
    fn test_children_tagged_filters_in_order() {
        let el = Element::new("Dependency")
            .with_child(Element::new("Dependee").with_attribute("paramId", "0"))
            .with_child(Element::new("Dependent").with_attribute("paramId", "1"))
            .with_child(Element::new("Dependee").with_attribute("paramId", "2"));

        let dependees: Vec<_> = el
            .children_tagged("Dependee")
            .map(|c| c.attribute("paramId").unwrap())
            .collect();
        assert_eq!(dependees, vec!["0", "2"]);
        assert!(el.find_first_child("Condition").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let el = Element::new("Condition")
            .with_attribute("type", "notCondition")
            .with_child(Element::new("Condition").with_attribute("type", "boolCondition"));

        let json = serde_json::to_string(&el).expect("serialize");
        let back: Element = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(el, back);
    }
}
