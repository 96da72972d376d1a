//! Shared test helpers for in-memory integration tests.

use a11y_support::{
    capability::{adapters::memory::StaticCapabilityManifest, services::CapabilityCache},
    config::SupportConfig,
    event_text::{
        adapters::memory::{InMemoryStringResources, InMemoryTypeResolver},
        domain::ControlClass,
        services::EventTextAggregator,
    },
};
use rstest::fixture;
use std::sync::Arc;

/// Package that owns the sample views.
pub const SETTINGS_PACKAGE: &str = "com.example.settings";

/// A check box class deriving from the default toggle base class.
pub const CHECK_BOX: &str = "android.widget.CheckBox";

/// A switch class deriving from the default toggle base class.
pub const SWITCH: &str = "android.widget.Switch";

/// A plain button class.
pub const BUTTON: &str = "android.widget.Button";

/// Aggregator wired to in-memory adapters.
pub type TestAggregator = EventTextAggregator<InMemoryTypeResolver, InMemoryStringResources>;

/// Provides a configuration describing a host that supports enumeration.
#[fixture]
pub fn config() -> SupportConfig {
    SupportConfig {
        host_api_level: 8,
        ..SupportConfig::default()
    }
}

/// Builds a capability cache over `manifest` using `config`.
#[must_use]
pub fn capability_cache(
    config: &SupportConfig,
    manifest: &Arc<StaticCapabilityManifest>,
) -> CapabilityCache<StaticCapabilityManifest> {
    CapabilityCache::new(
        Arc::clone(manifest),
        config.capability_gate(),
        config.host_api_level(),
    )
}

/// Builds a type resolver knowing the sample widget classes.
#[must_use]
pub fn widget_resolver(config: &SupportConfig) -> InMemoryTypeResolver {
    let resolver = config.type_resolver();
    let toggle_base = config
        .toggle_control_classes
        .first()
        .cloned()
        .unwrap_or_default();
    resolver.register(
        SETTINGS_PACKAGE,
        ControlClass::new(CHECK_BOX, [toggle_base.clone(), BUTTON.to_owned()]),
    );
    resolver.register(
        SETTINGS_PACKAGE,
        ControlClass::new(SWITCH, [toggle_base, BUTTON.to_owned()]),
    );
    resolver.register(
        SETTINGS_PACKAGE,
        ControlClass::new(BUTTON, ["android.widget.TextView"]),
    );
    resolver
}

/// Builds an aggregator with English state labels.
#[must_use]
pub fn english_aggregator(config: &SupportConfig) -> TestAggregator {
    EventTextAggregator::new(
        Arc::new(widget_resolver(config)),
        Arc::new(InMemoryStringResources::with_state_labels(
            "checked",
            "not checked",
        )),
    )
}
