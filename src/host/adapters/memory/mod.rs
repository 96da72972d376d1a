//! In-memory package and task inspectors.

mod packages;
mod tasks;

pub use packages::InMemoryPackageInspector;
pub use tasks::InMemoryTaskInspector;
