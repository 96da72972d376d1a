//! In-memory running task stack.

use crate::host::{domain::RunningTask, ports::TaskInspector};
use std::sync::{PoisonError, RwLock};

/// Task inspector backed by a stack of tasks, most recent first.
#[derive(Debug, Default)]
pub struct InMemoryTaskInspector {
    tasks: RwLock<Vec<RunningTask>>,
}

impl InMemoryTaskInspector {
    /// Creates an inspector with no running tasks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings a task whose top activity is `top_activity` to the front.
    pub fn launch(&self, top_activity: impl Into<String>) {
        let mut tasks = self.tasks.write().unwrap_or_else(PoisonError::into_inner);
        tasks.insert(0, RunningTask::new(top_activity));
    }

    /// Removes every running task.
    pub fn clear(&self) {
        let mut tasks = self.tasks.write().unwrap_or_else(PoisonError::into_inner);
        tasks.clear();
    }
}

impl TaskInspector for InMemoryTaskInspector {
    fn running_tasks(&self, limit: usize) -> Vec<RunningTask> {
        let tasks = self.tasks.read().unwrap_or_else(PoisonError::into_inner);
        tasks.iter().take(limit).cloned().collect()
    }
}
