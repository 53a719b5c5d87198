//! The identifier-to-entry lookup that conditions evaluate against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;
use trellis_value::Value;

use crate::core::entry::ParameterEntry;
use crate::core::error::{ParameterError, Result};
use crate::core::key::{ParameterId, ParameterKey};

/// Registry of parameter entries, keyed by identity.
///
/// The registry owns every [`ParameterEntry`]; conditions and dependencies
/// hold [`ParameterId`]s and resolve them here at evaluation time. There is
/// no process-global instance: the embedding configuration system owns one
/// registry per configuration tree and passes it by reference.
///
/// Keys are unique within a registry. Ids are assigned at insertion and
/// never reused.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterRegistry {
    entries: HashMap<ParameterId, ParameterEntry>,
    by_key: HashMap<ParameterKey, ParameterId>,
    next_id: u64,
}

impl ParameterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry and return its assigned id.
    ///
    /// The value's kind becomes the entry's declared kind. Fails with
    /// [`ParameterError::AlreadyExists`] if the key is taken.
    pub fn insert(&mut self, key: ParameterKey, value: Value) -> Result<ParameterId> {
        if self.by_key.contains_key(&key) {
            return Err(ParameterError::already_exists(key));
        }
        let id = ParameterId::from_raw(self.next_id);
        self.next_id += 1;
        trace!(id = %id, key = %key, kind = %value.kind(), "registering parameter");
        self.by_key.insert(key.clone(), id);
        self.entries.insert(id, ParameterEntry::new(id, key, value));
        Ok(id)
    }

    /// Get an entry by id
    pub fn get(&self, id: ParameterId) -> Option<&ParameterEntry> {
        self.entries.get(&id)
    }

    /// Resolve an id to an entry, failing clearly if it is unknown
    pub fn resolve(&self, id: ParameterId) -> Result<&ParameterEntry> {
        self.get(id).ok_or(ParameterError::UnknownParameter { id })
    }

    /// Get an entry by key
    pub fn get_by_key(&self, key: &ParameterKey) -> Option<&ParameterEntry> {
        self.by_key.get(key).and_then(|id| self.entries.get(id))
    }

    /// Look up the id assigned to a key
    pub fn id_of(&self, key: &ParameterKey) -> Option<ParameterId> {
        self.by_key.get(key).copied()
    }

    /// Replace an entry's value, keeping its declared kind.
    ///
    /// Fails with [`ParameterError::TypeMismatch`] if the new value has a
    /// different kind than the one declared at insertion.
    pub fn set_value(&mut self, id: ParameterId, value: Value) -> Result<()> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(ParameterError::UnknownParameter { id })?;
        if entry.kind() != value.kind() {
            return Err(ParameterError::type_mismatch(
                entry.key().clone(),
                entry.kind(),
                value.kind(),
            ));
        }
        trace!(id = %id, key = %entry.key(), value = %value, "updating parameter value");
        entry.set_value(value);
        Ok(())
    }

    /// Iterate over all entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = &ParameterEntry> {
        self.entries.values()
    }

    /// Iterate over all keys in unspecified order
    pub fn keys(&self) -> impl Iterator<Item = &ParameterKey> {
        self.by_key.keys()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_value::ValueKind;

    fn key(s: &str) -> ParameterKey {
        ParameterKey::new(s).unwrap()
    }

    #[test]
    fn test_insert_and_resolve() {
        let mut registry = ParameterRegistry::new();
        let id = registry
            .insert(key("Max Iterations"), Value::integer(100))
            .unwrap();

        let entry = registry.resolve(id).unwrap();
        assert_eq!(entry.key().as_str(), "Max Iterations");
        assert_eq!(entry.value(), &Value::integer(100));
        assert_eq!(entry.kind(), ValueKind::Integer);
    }

    #[test]
    fn test_resolve_unknown_id_fails() {
        let registry = ParameterRegistry::new();
        let err = registry.resolve(ParameterId::from_raw(99)).unwrap_err();
        assert_eq!(
            err,
            ParameterError::UnknownParameter {
                id: ParameterId::from_raw(99)
            }
        );
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut registry = ParameterRegistry::new();
        registry.insert(key("Solver"), Value::text("GMRES")).unwrap();
        let err = registry
            .insert(key("Solver"), Value::text("CG"))
            .unwrap_err();
        assert!(matches!(err, ParameterError::AlreadyExists { .. }));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = ParameterRegistry::new();
        let a = registry.insert(key("a"), Value::integer(1)).unwrap();
        let b = registry.insert(key("b"), Value::integer(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_set_value_keeps_kind() {
        let mut registry = ParameterRegistry::new();
        let id = registry.insert(key("Tolerance"), Value::float(1e-6)).unwrap();

        registry.set_value(id, Value::float(1e-8)).unwrap();
        assert_eq!(registry.get(id).unwrap().value(), &Value::float(1e-8));

        let err = registry.set_value(id, Value::text("tight")).unwrap_err();
        assert!(matches!(err, ParameterError::TypeMismatch { .. }));
    }

    #[test]
    fn test_get_by_key() {
        let mut registry = ParameterRegistry::new();
        let id = registry.insert(key("Verbose"), Value::boolean(true)).unwrap();
        assert_eq!(registry.get_by_key(&key("Verbose")).unwrap().id(), id);
        assert_eq!(registry.id_of(&key("Verbose")), Some(id));
        assert!(registry.get_by_key(&key("Missing")).is_none());
    }
}
