//! Non-empty ordered list of shared condition references.

use std::sync::Arc;

use crate::condition::{Condition, ConditionError};

/// The children of a logical condition.
///
/// Guaranteed non-empty: reducing an empty list has no defined result, so
/// construction rejects it up front rather than letting evaluation fail
/// later. Children are `Arc`-shared and may appear under several parents.
#[derive(Debug, Clone)]
pub struct ConditionList {
    items: Vec<Arc<Condition>>,
}

impl ConditionList {
    /// Create a list from the given children.
    ///
    /// Fails with [`ConditionError::EmptyConditionList`] if `items` is empty.
    pub fn new(items: Vec<Arc<Condition>>) -> Result<Self, ConditionError> {
        if items.is_empty() {
            return Err(ConditionError::EmptyConditionList);
        }
        Ok(Self { items })
    }

    /// Create a list with a single child
    pub fn single(item: Arc<Condition>) -> Self {
        Self { items: vec![item] }
    }

    /// Append a child condition to the end of the list
    pub fn push(&mut self, item: Arc<Condition>) {
        self.items.push(item);
    }

    /// Iterate over the children in order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Condition>> {
        self.items.iter()
    }

    /// Number of children (always at least one)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; the list is non-empty by construction
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for &'a ConditionList {
    type Item = &'a Arc<Condition>;
    type IntoIter = std::slice::Iter<'a, Arc<Condition>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ParameterCondition;
    use crate::core::{ParameterKey, ParameterRegistry};
    use trellis_value::Value;

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(
            ConditionList::new(vec![]).unwrap_err(),
            ConditionError::EmptyConditionList
        );
    }

    #[test]
    fn test_push_appends() {
        let mut registry = ParameterRegistry::new();
        let id = registry
            .insert(ParameterKey::new("flag").unwrap(), Value::boolean(true))
            .unwrap();
        let leaf = Arc::new(Condition::from(
            ParameterCondition::bool(&registry, id, true).unwrap(),
        ));

        let mut list = ConditionList::single(Arc::clone(&leaf));
        assert_eq!(list.len(), 1);
        list.push(leaf);
        assert_eq!(list.len(), 2);
    }
}
