//! Runtime type lookup port for event sources.

use crate::event_text::domain::EventSource;
use std::sync::Arc;
use thiserror::Error;

/// Result type for type resolution.
pub type TypeResolverResult<T> = Result<T, TypeResolverError>;

/// Resolves the runtime type of an event source and classifies it.
///
/// `Context` is whatever the host needs to load types (a class loader, an
/// application handle). `Handle` is the resolved type as the host sees it.
pub trait TypeResolver: Send + Sync {
    /// Host context used to load types.
    type Context: ?Sized;

    /// Resolved type handle.
    type Handle;

    /// Resolves the type of `source`.
    ///
    /// Returns `Ok(None)` when the type is unknown to the host.
    ///
    /// # Errors
    ///
    /// Returns [`TypeResolverError`] when the lookup itself fails.
    fn resolve_type(
        &self,
        context: &Self::Context,
        source: &EventSource,
    ) -> TypeResolverResult<Option<Self::Handle>>;

    /// Returns whether `handle` is a toggle control with a checked state.
    fn is_toggle_control(&self, handle: &Self::Handle) -> bool;
}

/// Errors returned by type resolver adapters.
#[derive(Debug, Clone, Error)]
pub enum TypeResolverError {
    /// The source package could not be loaded.
    #[error("package {0} could not be loaded")]
    PackageUnavailable(String),

    /// Generic lookup failure.
    #[error("type lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl TypeResolverError {
    /// Wraps a lookup failure.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
