//! Crate configuration.
//!
//! # Examples
//!
//! ```
//! use a11y_support::config::SupportConfig;
//!
//! let config = SupportConfig::from_json_str(r#"{"host_api_level": 8}"#)?;
//! assert!(config.capability_gate().permits(config.host_api_level()));
//! # Ok::<(), a11y_support::config::ConfigError>(())
//! ```

use crate::capability::domain::{CapabilityGate, DEFAULT_MINIMUM_API_LEVEL, HostApiLevel};
use crate::event_text::{
    adapters::memory::InMemoryTypeResolver, domain::DEFAULT_TOGGLE_CONTROL_CLASS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid configuration JSON.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Host description and tuning for the capability and event text services.
///
/// Every field is optional in the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SupportConfig {
    /// API level of the running host. Zero means unknown.
    pub host_api_level: u32,
    /// Lowest API level at which capabilities are enumerated.
    pub capability_minimum_api_level: u32,
    /// Base classes whose subclasses announce a checked state.
    pub toggle_control_classes: Vec<String>,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            host_api_level: 0,
            capability_minimum_api_level: DEFAULT_MINIMUM_API_LEVEL,
            toggle_control_classes: vec![DEFAULT_TOGGLE_CONTROL_CLASS.to_owned()],
        }
    }
}

impl SupportConfig {
    /// Parses configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed or
    /// contains unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the configured host API level.
    #[must_use]
    pub const fn host_api_level(&self) -> HostApiLevel {
        HostApiLevel::new(self.host_api_level)
    }

    /// Returns the capability gate.
    #[must_use]
    pub const fn capability_gate(&self) -> CapabilityGate {
        CapabilityGate::new(HostApiLevel::new(self.capability_minimum_api_level))
    }

    /// Builds an empty class registry using the configured toggle classes.
    #[must_use]
    pub fn type_resolver(&self) -> InMemoryTypeResolver {
        InMemoryTypeResolver::new(self.toggle_control_classes.iter().cloned())
    }
}
