//! In-memory installed package table.

use crate::host::{
    domain::PackageInfo,
    ports::{PackageInspector, PackageInspectorError, PackageInspectorResult},
};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Package inspector backed by a map of installed packages.
#[derive(Debug, Default)]
pub struct InMemoryPackageInspector {
    packages: RwLock<HashMap<String, PackageInfo>>,
}

impl InMemoryPackageInspector {
    /// Creates an inspector with no installed packages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `package`, replacing any package with the same name.
    pub fn install(&self, package: PackageInfo) {
        let mut packages = self.packages.write().unwrap_or_else(PoisonError::into_inner);
        packages.insert(package.package_name().to_owned(), package);
    }

    /// Removes the package named `package_name`.
    pub fn uninstall(&self, package_name: &str) {
        let mut packages = self.packages.write().unwrap_or_else(PoisonError::into_inner);
        packages.remove(package_name);
    }
}

impl PackageInspector for InMemoryPackageInspector {
    fn package_info(&self, package_name: &str) -> PackageInspectorResult<PackageInfo> {
        let packages = self.packages.read().unwrap_or_else(PoisonError::into_inner);
        packages
            .get(package_name)
            .cloned()
            .ok_or_else(|| PackageInspectorError::NameNotFound(package_name.to_owned()))
    }
}
