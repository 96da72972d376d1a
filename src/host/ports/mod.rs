//! Port contracts for host inspection.

mod packages;
mod tasks;

pub use packages::{PackageInspector, PackageInspectorError, PackageInspectorResult};
pub use tasks::TaskInspector;
