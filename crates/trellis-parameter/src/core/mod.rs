//! Core parameter types: keys, entries, and the registry.

mod entry;
mod error;
mod key;
mod registry;

pub use entry::ParameterEntry;
pub use error::{ParameterError, Result};
pub use key::{KeyParseError, ParameterId, ParameterKey};
pub use registry::ParameterRegistry;
