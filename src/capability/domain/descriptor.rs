//! Enumerated capability descriptors.

use serde::{Deserialize, Serialize};

/// One capability reported by the host during enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityDescriptor {
    name: String,
}

impl CapabilityDescriptor {
    /// Creates a descriptor for the named capability.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the capability name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumes the descriptor and returns the capability name.
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}
