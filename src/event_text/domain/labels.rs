//! Localized toggle state labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// String resources the aggregator needs from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringResourceKey {
    /// Label announced for a checked toggle.
    ValueChecked,
    /// Label announced for an unchecked toggle.
    ValueNotChecked,
}

impl StringResourceKey {
    /// Returns the canonical resource name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValueChecked => "value_checked",
            Self::ValueNotChecked => "value_not_checked",
        }
    }
}

impl fmt::Display for StringResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The localized "checked" and "not checked" labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateLabelPair {
    checked: String,
    not_checked: String,
}

impl StateLabelPair {
    /// Creates a label pair.
    #[must_use]
    pub fn new(checked: impl Into<String>, not_checked: impl Into<String>) -> Self {
        Self {
            checked: checked.into(),
            not_checked: not_checked.into(),
        }
    }

    /// Returns the label for the checked state.
    #[must_use]
    pub fn checked(&self) -> &str {
        &self.checked
    }

    /// Returns the label for the unchecked state.
    #[must_use]
    pub fn not_checked(&self) -> &str {
        &self.not_checked
    }

    /// Returns whether `text` is exactly one of the two labels.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text == self.checked || text == self.not_checked
    }
}
