//! A single named, typed configuration value.

use serde::{Deserialize, Serialize};
use trellis_value::{Value, ValueKind};

use crate::core::key::{ParameterId, ParameterKey};

/// A named, typed configuration leaf.
///
/// Entries are owned by the [`ParameterRegistry`](crate::core::ParameterRegistry)
/// and referenced by conditions through their [`ParameterId`]. The kind of an
/// entry is fixed at insertion; only the payload changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterEntry {
    id: ParameterId,
    key: ParameterKey,
    value: Value,
    doc: Option<String>,
}

impl ParameterEntry {
    pub(crate) fn new(id: ParameterId, key: ParameterKey, value: Value) -> Self {
        Self {
            id,
            key,
            value,
            doc: None,
        }
    }

    /// The process-wide identity of this entry
    pub fn id(&self) -> ParameterId {
        self.id
    }

    /// The name of this entry
    pub fn key(&self) -> &ParameterKey {
        &self.key
    }

    /// The current value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The declared kind, fixed at insertion
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Whether this entry holds a numeric kind
    pub fn is_numeric(&self) -> bool {
        self.value.is_numeric()
    }

    /// Documentation string shown by configuration tooling
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Attach a documentation string
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = value;
    }
}
