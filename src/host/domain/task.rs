//! Running task snapshots.

use serde::{Deserialize, Serialize};

/// A running task as reported by the host, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTask {
    top_activity: String,
}

impl RunningTask {
    /// Creates a task whose foreground activity is `top_activity`.
    #[must_use]
    pub fn new(top_activity: impl Into<String>) -> Self {
        Self {
            top_activity: top_activity.into(),
        }
    }

    /// Returns the fully-qualified class name of the top activity.
    #[must_use]
    pub fn top_activity(&self) -> &str {
        &self.top_activity
    }
}
