//! Package version and foreground activity queries.

use crate::host::{
    domain::PackageInfo,
    ports::{PackageInspector, PackageInspectorError, TaskInspector},
};
use std::sync::Arc;
use tracing::error;

/// Answers version and foreground activity questions about the host.
///
/// Lookups never fail outward: a missing package or an idle task stack is
/// reported as `None`.
#[derive(Clone)]
pub struct HostInspectionService<P, T>
where
    P: PackageInspector,
    T: TaskInspector,
{
    packages: Arc<P>,
    tasks: Arc<T>,
}

impl<P, T> HostInspectionService<P, T>
where
    P: PackageInspector,
    T: TaskInspector,
{
    /// Creates a new inspection service.
    #[must_use]
    pub const fn new(packages: Arc<P>, tasks: Arc<T>) -> Self {
        Self { packages, tasks }
    }

    /// Returns the version code of `package_name`.
    #[must_use]
    pub fn version_code(&self, package_name: &str) -> Option<i32> {
        self.lookup(package_name)
            .as_ref()
            .map(PackageInfo::version_code)
    }

    /// Returns the version name of `package_name`.
    ///
    /// `None` covers both a missing package and one without a version name.
    #[must_use]
    pub fn version_name(&self, package_name: &str) -> Option<String> {
        self.lookup(package_name)
            .and_then(|package| package.version_name().map(ToOwned::to_owned))
    }

    /// Returns the class name of the activity in the most recent task.
    #[must_use]
    pub fn current_activity_name(&self) -> Option<String> {
        self.tasks
            .running_tasks(1)
            .into_iter()
            .next()
            .map(|task| task.top_activity().to_owned())
    }

    fn lookup(&self, package_name: &str) -> Option<PackageInfo> {
        match self.packages.package_info(package_name) {
            Ok(package) => Some(package),
            Err(PackageInspectorError::NameNotFound(_)) => {
                error!(package_name, "could not find package");
                None
            }
            Err(err) => {
                error!(package_name, error = %err, "package lookup failed");
                None
            }
        }
    }
}
