//! Builds the spoken text of an event from its fragments.

use crate::event_text::{
    domain::{
        EventSource, StateLabelPair, StringResourceKey, find_state_fragment_index, join_fragments,
    },
    ports::{StringResourceProvider, StringResourceResult, TypeResolver},
};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, warn};

/// Joins event text fragments, dropping a redundant toggle state label.
///
/// The host appends "checked"/"not checked" to the text of toggle controls
/// even though the checked attribute is reported separately. When the event
/// source resolves to a toggle control, the first fragment equal to either
/// label is left out.
///
/// The label pair is loaded from the string resource provider at most once
/// per aggregator. A failed load is not cached; that call aggregates without
/// exclusion and the next call tries again. Clones share the collaborators
/// and carry over labels that are already loaded.
pub struct EventTextAggregator<R, S>
where
    R: TypeResolver,
    S: StringResourceProvider,
{
    type_resolver: Arc<R>,
    strings: Arc<S>,
    labels: OnceCell<StateLabelPair>,
}

impl<R, S> Clone for EventTextAggregator<R, S>
where
    R: TypeResolver,
    S: StringResourceProvider,
{
    fn clone(&self) -> Self {
        Self {
            type_resolver: Arc::clone(&self.type_resolver),
            strings: Arc::clone(&self.strings),
            labels: self.labels.clone(),
        }
    }
}

impl<R, S> EventTextAggregator<R, S>
where
    R: TypeResolver,
    S: StringResourceProvider,
{
    /// Creates an aggregator with unresolved state labels.
    #[must_use]
    pub const fn new(type_resolver: Arc<R>, strings: Arc<S>) -> Self {
        Self {
            type_resolver,
            strings,
            labels: OnceCell::new(),
        }
    }

    /// Returns the text of an event.
    ///
    /// Fragments are joined in order with single spaces. If `source`
    /// resolves to a toggle control, the first fragment equal to the checked
    /// or not-checked label is skipped. Type lookup and label failures only
    /// disable the skip; aggregation itself always succeeds.
    #[must_use]
    pub fn aggregate_text<T>(
        &self,
        context: &R::Context,
        fragments: &[T],
        source: &EventSource,
    ) -> String
    where
        T: AsRef<str>,
    {
        let labels = self.state_labels();
        let toggle = self.is_toggle_source(context, source);
        let excluded = labels
            .filter(|_| toggle)
            .and_then(|pair| find_state_fragment_index(fragments, pair));
        join_fragments(fragments, excluded)
    }

    /// Returns the toggle state labels, loading them on first use.
    ///
    /// Returns `None` when the labels cannot be loaded.
    #[must_use]
    pub fn state_labels(&self) -> Option<&StateLabelPair> {
        match self
            .labels
            .get_or_try_init(|| load_state_labels(self.strings.as_ref()))
        {
            Ok(labels) => Some(labels),
            Err(err) => {
                warn!(error = %err, "toggle state labels unavailable");
                None
            }
        }
    }

    /// Forgets the loaded labels so the next call reloads them.
    pub fn reset_labels(&mut self) {
        self.labels = OnceCell::new();
    }

    fn is_toggle_source(&self, context: &R::Context, source: &EventSource) -> bool {
        match self.type_resolver.resolve_type(context, source) {
            Ok(Some(handle)) => self.type_resolver.is_toggle_control(&handle),
            Ok(None) => {
                debug!(
                    class_name = source.class_name(),
                    package_name = source.package_name(),
                    "event source type unknown"
                );
                false
            }
            Err(err) => {
                warn!(
                    class_name = source.class_name(),
                    package_name = source.package_name(),
                    error = %err,
                    "event source type lookup failed"
                );
                false
            }
        }
    }
}

fn load_state_labels<S>(strings: &S) -> StringResourceResult<StateLabelPair>
where
    S: StringResourceProvider + ?Sized,
{
    let checked = strings.get_string(StringResourceKey::ValueChecked)?;
    let not_checked = strings.get_string(StringResourceKey::ValueNotChecked)?;
    Ok(StateLabelPair::new(checked, not_checked))
}
