//! Capability enumerator backed by a static manifest.

use crate::capability::{
    domain::CapabilityDescriptor,
    ports::{CapabilityEnumerationError, CapabilityEnumerationResult, CapabilityEnumerator},
};
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

/// Capability enumerator that reports a fixed manifest.
///
/// The manifest can be switched between a declared list, an unavailable
/// entry point and a failing one, which lets callers script the outcomes a
/// real host produces. Every call to [`CapabilityEnumerator::enumerate`] is
/// counted.
#[derive(Debug, Default)]
pub struct StaticCapabilityManifest {
    outcome: RwLock<ManifestOutcome>,
    enumerations: AtomicUsize,
}

#[derive(Debug, Clone)]
enum ManifestOutcome {
    Declared(Vec<ManifestEntry>),
    Unavailable,
    Failing(CapabilityEnumerationError),
}

impl Default for ManifestOutcome {
    fn default() -> Self {
        Self::Declared(Vec::new())
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ManifestEntry {
    name: Option<String>,
}

impl StaticCapabilityManifest {
    /// Creates a manifest declaring the given capability names.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_outcome(ManifestOutcome::Declared(entries_from(names)))
    }

    /// Creates a manifest whose host has no enumeration entry point.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::with_outcome(ManifestOutcome::Unavailable)
    }

    /// Creates a manifest whose enumeration always fails with `error`.
    #[must_use]
    pub fn failing(error: CapabilityEnumerationError) -> Self {
        Self::with_outcome(ManifestOutcome::Failing(error))
    }

    /// Parses a JSON manifest of the form `[{"name": "..."}, ...]`.
    ///
    /// Entries without a `name` are kept and reported as
    /// [`CapabilityEnumerationError::MissingName`] at enumeration time.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the document is not a JSON array of
    /// objects.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<ManifestEntry> = serde_json::from_str(json)?;
        Ok(Self::with_outcome(ManifestOutcome::Declared(entries)))
    }

    const fn with_outcome(outcome: ManifestOutcome) -> Self {
        Self {
            outcome: RwLock::new(outcome),
            enumerations: AtomicUsize::new(0),
        }
    }

    /// Replaces the manifest with the given capability names.
    pub fn declare<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replace(ManifestOutcome::Declared(entries_from(names)));
    }

    /// Makes subsequent enumerations report an unavailable entry point.
    pub fn make_unavailable(&self) {
        self.replace(ManifestOutcome::Unavailable);
    }

    /// Makes subsequent enumerations fail with `error`.
    pub fn make_failing(&self, error: CapabilityEnumerationError) {
        self.replace(ManifestOutcome::Failing(error));
    }

    /// Returns how many times the manifest has been enumerated.
    #[must_use]
    pub fn enumeration_count(&self) -> usize {
        self.enumerations.load(Ordering::SeqCst)
    }

    fn replace(&self, outcome: ManifestOutcome) {
        let mut current = self.outcome.write().unwrap_or_else(PoisonError::into_inner);
        *current = outcome;
    }
}

fn entries_from<I, S>(names: I) -> Vec<ManifestEntry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(|name| ManifestEntry {
            name: Some(name.into()),
        })
        .collect()
}

impl CapabilityEnumerator for StaticCapabilityManifest {
    fn enumerate(&self) -> CapabilityEnumerationResult<Vec<CapabilityDescriptor>> {
        self.enumerations.fetch_add(1, Ordering::SeqCst);
        let outcome = self.outcome.read().unwrap_or_else(PoisonError::into_inner);
        match &*outcome {
            ManifestOutcome::Declared(entries) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    entry
                        .name
                        .clone()
                        .map(CapabilityDescriptor::new)
                        .ok_or(CapabilityEnumerationError::MissingName { index })
                })
                .collect(),
            ManifestOutcome::Unavailable => Err(CapabilityEnumerationError::Unavailable),
            ManifestOutcome::Failing(error) => Err(error.clone()),
        }
    }
}
