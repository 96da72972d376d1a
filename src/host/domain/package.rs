//! Installed package metadata.

use serde::{Deserialize, Serialize};

/// Version metadata of an installed package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    package_name: String,
    version_code: i32,
    version_name: Option<String>,
}

impl PackageInfo {
    /// Creates package metadata without a version name.
    #[must_use]
    pub fn new(package_name: impl Into<String>, version_code: i32) -> Self {
        Self {
            package_name: package_name.into(),
            version_code,
            version_name: None,
        }
    }

    /// Sets the human-readable version name.
    #[must_use]
    pub fn with_version_name(mut self, version_name: impl Into<String>) -> Self {
        self.version_name = Some(version_name.into());
        self
    }

    /// Returns the package name.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Returns the integer version code.
    #[must_use]
    pub const fn version_code(&self) -> i32 {
        self.version_code
    }

    /// Returns the version name, if the package declares one.
    #[must_use]
    pub fn version_name(&self) -> Option<&str> {
        self.version_name.as_deref()
    }
}
