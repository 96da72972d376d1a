//! Resolved control classes.

use serde::{Deserialize, Serialize};

/// Base class of the host's two-state buttons (check boxes, switches).
pub const DEFAULT_TOGGLE_CONTROL_CLASS: &str = "android.widget.CompoundButton";

/// A resolved view class together with its superclass chain.
///
/// `ancestors` lists superclasses nearest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlClass {
    name: String,
    ancestors: Vec<String>,
}

impl ControlClass {
    /// Creates a class with the given superclass chain.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, ancestors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ancestors: ancestors.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the fully-qualified class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the superclass chain, nearest first.
    #[must_use]
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// Returns whether this class is `base` or derives from it.
    #[must_use]
    pub fn is_assignable_to(&self, base: &str) -> bool {
        self.name == base || self.ancestors.iter().any(|ancestor| ancestor == base)
    }
}
