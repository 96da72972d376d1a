//! In-memory string resource table.

use crate::event_text::{
    domain::StringResourceKey,
    ports::{StringResourceError, StringResourceProvider, StringResourceResult},
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

/// String resource provider backed by a map.
///
/// Every lookup is counted, hit or miss.
#[derive(Debug, Default)]
pub struct InMemoryStringResources {
    values: RwLock<HashMap<StringResourceKey, String>>,
    lookups: AtomicUsize,
}

impl InMemoryStringResources {
    /// Creates an empty resource table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding both toggle state labels.
    #[must_use]
    pub fn with_state_labels(checked: impl Into<String>, not_checked: impl Into<String>) -> Self {
        let resources = Self::new();
        resources.set(StringResourceKey::ValueChecked, checked);
        resources.set(StringResourceKey::ValueNotChecked, not_checked);
        resources
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: StringResourceKey, value: impl Into<String>) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key, value.into());
    }

    /// Removes the value stored under `key`.
    pub fn remove(&self, key: StringResourceKey) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.remove(&key);
    }

    /// Returns how many lookups have been served.
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl StringResourceProvider for InMemoryStringResources {
    fn get_string(&self, key: StringResourceKey) -> StringResourceResult<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values
            .get(&key)
            .cloned()
            .ok_or(StringResourceError::NotFound(key))
    }
}
