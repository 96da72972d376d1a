//! Running task lookup port.

use crate::host::domain::RunningTask;

/// Lists the tasks currently running on the host.
pub trait TaskInspector: Send + Sync {
    /// Returns at most `limit` running tasks, most recent first.
    fn running_tasks(&self, limit: usize) -> Vec<RunningTask>;
}
