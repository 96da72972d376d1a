//! Event origin identifiers.

use serde::{Deserialize, Serialize};

/// Class and package of the view that produced an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventSource {
    class_name: String,
    package_name: String,
}

impl EventSource {
    /// Creates a source from its fully-qualified class name and package.
    #[must_use]
    pub fn new(class_name: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            package_name: package_name.into(),
        }
    }

    /// Returns the fully-qualified class name of the source view.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the package that owns the source view.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}
