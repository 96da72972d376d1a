//! Host inspection tests over in-memory inspectors.

use a11y_support::host::{
    adapters::memory::{InMemoryPackageInspector, InMemoryTaskInspector},
    domain::PackageInfo,
    services::HostInspectionService,
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
fn service_reports_installed_packages_and_foreground_activity() {
    let packages = Arc::new(InMemoryPackageInspector::new());
    packages.install(PackageInfo::new("com.example.reader", 120).with_version_name("1.2.0"));
    let tasks = Arc::new(InMemoryTaskInspector::new());
    tasks.launch("com.example.reader.SettingsActivity");
    let service = HostInspectionService::new(packages, tasks);

    assert_eq!(service.version_code("com.example.reader"), Some(120));
    assert_eq!(
        service.version_name("com.example.reader").as_deref(),
        Some("1.2.0")
    );
    assert_eq!(service.version_code("com.example.absent"), None);
    assert_eq!(
        service.current_activity_name().as_deref(),
        Some("com.example.reader.SettingsActivity")
    );
}
