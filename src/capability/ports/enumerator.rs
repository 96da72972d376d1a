//! Host capability enumeration port.

use crate::capability::domain::CapabilityDescriptor;
use std::sync::Arc;
use thiserror::Error;

/// Result type for capability enumeration.
pub type CapabilityEnumerationResult<T> = Result<T, CapabilityEnumerationError>;

/// Enumerates every capability the host declares.
///
/// Adapters report three distinct outcomes: a list of descriptors (possibly
/// empty), [`CapabilityEnumerationError::Unavailable`] when the host has no
/// enumeration entry point, or another error when reading the list fails
/// part-way. Partial results must never be returned as success.
#[cfg_attr(test, mockall::automock)]
pub trait CapabilityEnumerator: Send + Sync {
    /// Returns all capabilities declared by the host.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityEnumerationError`] when enumeration is unavailable
    /// or fails while invoking the host or reading its results.
    fn enumerate(&self) -> CapabilityEnumerationResult<Vec<CapabilityDescriptor>>;
}

/// Errors returned by capability enumeration adapters.
#[derive(Debug, Clone, Error)]
pub enum CapabilityEnumerationError {
    /// The host does not expose an enumeration entry point.
    #[error("capability enumeration is not available on this host")]
    Unavailable,

    /// Invoking the host enumeration entry point failed.
    #[error("capability enumeration failed: {0}")]
    Invocation(Arc<dyn std::error::Error + Send + Sync>),

    /// The host refused access to the enumerated results.
    #[error("capability enumeration access denied: {0}")]
    Access(String),

    /// An enumerated entry carried no capability name.
    #[error("capability entry {index} has no name")]
    MissingName {
        /// Position of the malformed entry in the enumeration.
        index: usize,
    },
}

impl CapabilityEnumerationError {
    /// Wraps an invocation failure raised by the host.
    pub fn invocation(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Invocation(Arc::new(err))
    }
}
