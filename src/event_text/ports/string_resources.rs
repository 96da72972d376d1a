//! Localized string resource port.

use crate::event_text::domain::StringResourceKey;
use std::sync::Arc;
use thiserror::Error;

/// Result type for string resource lookups.
pub type StringResourceResult<T> = Result<T, StringResourceError>;

/// Loads localized strings from the host.
pub trait StringResourceProvider: Send + Sync {
    /// Returns the localized value of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StringResourceError`] when the resource is missing or the
    /// host cannot load it.
    fn get_string(&self, key: StringResourceKey) -> StringResourceResult<String>;
}

/// Errors returned by string resource adapters.
#[derive(Debug, Clone, Error)]
pub enum StringResourceError {
    /// The host has no value for the key.
    #[error("string resource {0} not found")]
    NotFound(StringResourceKey),

    /// The host failed while loading the resource.
    #[error("string resource provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl StringResourceError {
    /// Wraps a provider failure.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
