//! Event text aggregation tests over in-memory host services.

use super::helpers::{
    BUTTON, CHECK_BOX, SETTINGS_PACKAGE, SWITCH, TestAggregator, config, english_aggregator,
    widget_resolver,
};
use a11y_support::{
    config::SupportConfig,
    event_text::{
        adapters::memory::InMemoryStringResources, domain::EventSource,
        services::EventTextAggregator,
    },
};
use rstest::rstest;
use std::sync::Arc;
use std::thread;

#[rstest]
#[case(CHECK_BOX, &["Button", "checked"], "Button")]
#[case(SWITCH, &["Bluetooth", "not checked"], "Bluetooth")]
#[case(CHECK_BOX, &["checked", "checked"], "checked")]
#[case(CHECK_BOX, &["Remember me"], "Remember me")]
#[case(BUTTON, &["Button", "checked"], "Button checked")]
#[case("com.example.CustomView", &["Button", "checked"], "Button checked")]
#[case(CHECK_BOX, &[], "")]
fn event_text_is_aggregated(
    config: SupportConfig,
    #[case] class_name: &str,
    #[case] fragments: &[&str],
    #[case] expected: &str,
) {
    let aggregator = english_aggregator(&config);
    let source = EventSource::new(class_name, SETTINGS_PACKAGE);

    assert_eq!(aggregator.aggregate_text(&(), fragments, &source), expected);
}

#[rstest]
fn unknown_package_disables_exclusion(config: SupportConfig) {
    let aggregator = english_aggregator(&config);
    let source = EventSource::new(CHECK_BOX, "com.example.other");

    assert_eq!(
        aggregator.aggregate_text(&(), &["Button", "checked"], &source),
        "Button checked"
    );
}

#[rstest]
fn configured_toggle_classes_drive_exclusion(config: SupportConfig) {
    let custom = SupportConfig {
        toggle_control_classes: vec![BUTTON.to_owned()],
        ..config
    };
    let aggregator = english_aggregator(&custom);
    let source = EventSource::new(BUTTON, SETTINGS_PACKAGE);

    assert_eq!(
        aggregator.aggregate_text(&(), &["Send", "checked"], &source),
        "Send"
    );
}

#[rstest]
fn concurrent_first_aggregations_load_labels_once(config: SupportConfig) {
    let strings = Arc::new(InMemoryStringResources::with_state_labels(
        "checked",
        "not checked",
    ));
    let aggregator: TestAggregator =
        EventTextAggregator::new(Arc::new(widget_resolver(&config)), Arc::clone(&strings));
    let source = EventSource::new(CHECK_BOX, SETTINGS_PACKAGE);

    thread::scope(|scope| {
        for _ in 0..16 {
            let aggregator = &aggregator;
            let source = &source;
            scope.spawn(move || {
                let text = aggregator.aggregate_text(&(), &["x", "checked", "", ""], source);
                assert_eq!(text, "x  ");
            });
        }
    });

    assert_eq!(strings.lookup_count(), 2);
}
