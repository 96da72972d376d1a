//! Capability cache tests over the static manifest adapter.

use super::helpers::{capability_cache, config};
use a11y_support::{
    capability::{adapters::memory::StaticCapabilityManifest, ports::CapabilityEnumerationError},
    config::SupportConfig,
};
use rstest::rstest;
use std::sync::Arc;
use std::thread;

#[rstest]
fn declared_capabilities_are_answered_from_cache(config: SupportConfig) {
    let manifest = Arc::new(StaticCapabilityManifest::new(["A", "B"]));
    let cache = capability_cache(&config, &manifest);

    assert!(cache.has_capability("A"));
    assert!(cache.has_capability("B"));
    assert!(!cache.has_capability("C"));
    assert_eq!(manifest.enumeration_count(), 1);
}

#[rstest]
fn host_below_gate_ignores_manifest(config: SupportConfig) {
    let old_host = SupportConfig {
        host_api_level: 4,
        ..config
    };
    let manifest = Arc::new(StaticCapabilityManifest::new(["A"]));
    let cache = capability_cache(&old_host, &manifest);

    assert!(!cache.has_capability("A"));
    assert_eq!(manifest.enumeration_count(), 0);
}

#[rstest]
fn unavailable_enumeration_is_retried(config: SupportConfig) {
    let manifest = Arc::new(StaticCapabilityManifest::unavailable());
    let cache = capability_cache(&config, &manifest);

    assert!(!cache.has_capability("A"));
    assert!(!cache.has_capability("A"));
    assert_eq!(manifest.enumeration_count(), 2);

    manifest.declare(["A"]);
    assert!(cache.has_capability("A"));
    assert!(cache.has_capability("A"));
    assert_eq!(manifest.enumeration_count(), 3);
}

#[rstest]
fn failing_enumeration_leaves_cache_empty(config: SupportConfig) {
    let manifest = Arc::new(StaticCapabilityManifest::failing(
        CapabilityEnumerationError::Access("field not public".to_owned()),
    ));
    let cache = capability_cache(&config, &manifest);

    assert!(!cache.has_capability("A"));
    assert!(!cache.is_loaded());
    assert!(cache.known_capabilities().is_empty());
}

#[rstest]
fn unnamed_manifest_entry_fails_whole_fill(config: SupportConfig) -> eyre::Result<()> {
    let manifest = Arc::new(StaticCapabilityManifest::from_json_str(
        r#"[{"name": "A"}, {}, {"name": "B"}]"#,
    )?);
    let cache = capability_cache(&config, &manifest);

    assert!(!cache.has_capability("A"));
    assert!(!cache.is_loaded());
    assert!(cache.known_capabilities().is_empty());
    Ok(())
}

#[rstest]
fn json_manifest_fills_cache(config: SupportConfig) -> eyre::Result<()> {
    let manifest = Arc::new(StaticCapabilityManifest::from_json_str(
        r#"[{"name": "android.hardware.wifi"}, {"name": "android.hardware.touchscreen"}]"#,
    )?);
    let cache = capability_cache(&config, &manifest);

    assert!(cache.has_capability("android.hardware.wifi"));
    assert_eq!(
        cache.known_capabilities(),
        vec!["android.hardware.touchscreen", "android.hardware.wifi"]
    );
    Ok(())
}

#[rstest]
fn empty_manifest_is_enumerated_once(config: SupportConfig) {
    let manifest = Arc::new(StaticCapabilityManifest::default());
    let cache = capability_cache(&config, &manifest);

    assert!(!cache.has_capability("A"));
    assert!(!cache.has_capability("B"));
    assert!(cache.is_loaded());
    assert_eq!(manifest.enumeration_count(), 1);
}

#[rstest]
fn concurrent_first_queries_enumerate_once(config: SupportConfig) {
    let manifest = Arc::new(StaticCapabilityManifest::new(["A", "B"]));
    let cache = capability_cache(&config, &manifest);

    thread::scope(|scope| {
        for worker in 0..8 {
            let cache = &cache;
            scope.spawn(move || {
                let name = if worker < 4 { "A" } else { "C" };
                assert_eq!(cache.has_capability(name), name == "A");
            });
        }
    });

    assert_eq!(manifest.enumeration_count(), 1);
}

#[rstest]
fn reset_reenumerates_changed_manifest(config: SupportConfig) {
    let manifest = Arc::new(StaticCapabilityManifest::new(["A"]));
    let cache = capability_cache(&config, &manifest);
    assert!(cache.has_capability("A"));

    manifest.declare(["B"]);
    assert!(!cache.has_capability("B"));

    cache.reset();
    assert!(cache.has_capability("B"));
    assert!(!cache.has_capability("A"));
    assert_eq!(manifest.enumeration_count(), 2);
}
