//! In-memory class registry for event source type lookup.

use crate::event_text::{
    domain::{ControlClass, DEFAULT_TOGGLE_CONTROL_CLASS, EventSource},
    ports::{TypeResolver, TypeResolverError, TypeResolverResult},
};
use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

/// Type resolver backed by a registry of known classes.
///
/// Classes are keyed by package and class name. A resolved class is a toggle
/// control when it is, or derives from, one of the configured toggle base
/// classes.
#[derive(Debug)]
pub struct InMemoryTypeResolver {
    toggle_base_classes: Vec<String>,
    state: RwLock<RegistryState>,
}

#[derive(Debug, Default)]
struct RegistryState {
    classes: HashMap<(String, String), ControlClass>,
    unavailable_packages: HashSet<String>,
}

impl InMemoryTypeResolver {
    /// Creates an empty registry with the given toggle base classes.
    #[must_use]
    pub fn new<I, S>(toggle_base_classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            toggle_base_classes: toggle_base_classes.into_iter().map(Into::into).collect(),
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Registers `class` as loadable from `package_name`.
    pub fn register(&self, package_name: impl Into<String>, class: ControlClass) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state
            .classes
            .insert((package_name.into(), class.name().to_owned()), class);
    }

    /// Makes every lookup in `package_name` fail.
    pub fn mark_package_unavailable(&self, package_name: impl Into<String>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.unavailable_packages.insert(package_name.into());
    }

    /// Returns the configured toggle base classes.
    #[must_use]
    pub fn toggle_base_classes(&self) -> &[String] {
        &self.toggle_base_classes
    }
}

impl Default for InMemoryTypeResolver {
    fn default() -> Self {
        Self::new([DEFAULT_TOGGLE_CONTROL_CLASS])
    }
}

impl TypeResolver for InMemoryTypeResolver {
    type Context = ();
    type Handle = ControlClass;

    fn resolve_type(
        &self,
        _context: &Self::Context,
        source: &EventSource,
    ) -> TypeResolverResult<Option<Self::Handle>> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        if state.unavailable_packages.contains(source.package_name()) {
            return Err(TypeResolverError::PackageUnavailable(
                source.package_name().to_owned(),
            ));
        }
        let key = (
            source.package_name().to_owned(),
            source.class_name().to_owned(),
        );
        Ok(state.classes.get(&key).cloned())
    }

    fn is_toggle_control(&self, handle: &Self::Handle) -> bool {
        self.toggle_base_classes
            .iter()
            .any(|base| handle.is_assignable_to(base))
    }
}
