//! Installed package lookup port.

use crate::host::domain::PackageInfo;
use std::sync::Arc;
use thiserror::Error;

/// Result type for package lookups.
pub type PackageInspectorResult<T> = Result<T, PackageInspectorError>;

/// Reads metadata of installed packages.
pub trait PackageInspector: Send + Sync {
    /// Returns metadata for `package_name`.
    ///
    /// # Errors
    ///
    /// Returns [`PackageInspectorError::NameNotFound`] when the package is
    /// not installed, or [`PackageInspectorError::Lookup`] when the host
    /// fails.
    fn package_info(&self, package_name: &str) -> PackageInspectorResult<PackageInfo>;
}

/// Errors returned by package inspector adapters.
#[derive(Debug, Clone, Error)]
pub enum PackageInspectorError {
    /// No installed package has the given name.
    #[error("package {0} not found")]
    NameNotFound(String),

    /// Generic host failure.
    #[error("package lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl PackageInspectorError {
    /// Wraps a host failure.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
