//! Domain model for host inspection.

mod package;
mod task;

pub use package::PackageInfo;
pub use task::RunningTask;
