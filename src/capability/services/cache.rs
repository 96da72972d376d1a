//! Memoized capability lookups.

use crate::capability::{
    domain::{CapabilityGate, HostApiLevel},
    ports::CapabilityEnumerator,
};
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Fill state of the capability set.
///
/// A failed enumeration leaves the state `Pending`; only a successful one
/// moves it to `Loaded`, including when the host declares no capabilities.
#[derive(Debug)]
enum CacheState {
    Pending,
    Loaded(HashSet<String>),
}

/// Answers capability queries from a set filled by one host enumeration.
///
/// The cache is meant to be constructed once per process and shared by
/// reference. The "check, enumerate, fill" sequence runs under the write
/// lock, so concurrent first queries enumerate the host exactly once.
#[derive(Debug)]
pub struct CapabilityCache<E>
where
    E: CapabilityEnumerator,
{
    enumerator: Arc<E>,
    gate: CapabilityGate,
    host_api_level: HostApiLevel,
    state: RwLock<CacheState>,
}

impl<E> CapabilityCache<E>
where
    E: CapabilityEnumerator,
{
    /// Creates an empty cache for a host running at `host_api_level`.
    #[must_use]
    pub fn new(enumerator: Arc<E>, gate: CapabilityGate, host_api_level: HostApiLevel) -> Self {
        Self {
            enumerator,
            gate,
            host_api_level,
            state: RwLock::new(CacheState::Pending),
        }
    }

    /// Returns whether the host declares the capability `name`.
    ///
    /// Hosts below the gate always answer `false` without enumerating. An
    /// unavailable or failing enumeration also answers `false` and leaves the
    /// cache unfilled so the next query retries.
    #[must_use]
    pub fn has_capability(&self, name: &str) -> bool {
        if !self.gate.permits(self.host_api_level) {
            debug!(
                capability = name,
                host_api_level = %self.host_api_level,
                minimum_api_level = %self.gate.minimum_api_level(),
                "host predates capability enumeration"
            );
            return false;
        }

        if let CacheState::Loaded(known) = &*self.read_state() {
            return known.contains(name);
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if let CacheState::Loaded(known) = &*state {
            return known.contains(name);
        }

        match self.enumerator.enumerate() {
            Ok(descriptors) => {
                let known: HashSet<String> = descriptors
                    .into_iter()
                    .map(|descriptor| descriptor.into_name())
                    .collect();
                debug!(count = known.len(), "host capabilities enumerated");
                let present = known.contains(name);
                *state = CacheState::Loaded(known);
                present
            }
            Err(err) => {
                debug!(capability = name, error = %err, "capability enumeration failed");
                false
            }
        }
    }

    /// Returns whether a successful enumeration has filled the cache.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(&*self.read_state(), CacheState::Loaded(_))
    }

    /// Returns the cached capability names in sorted order.
    ///
    /// The list is empty until a successful enumeration fills the cache.
    #[must_use]
    pub fn known_capabilities(&self) -> Vec<String> {
        let mut names: Vec<String> = match &*self.read_state() {
            CacheState::Loaded(known) => known.iter().cloned().collect(),
            CacheState::Pending => Vec::new(),
        };
        names.sort_unstable();
        names
    }

    /// Discards cached capabilities so the next query enumerates again.
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = CacheState::Pending;
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}
