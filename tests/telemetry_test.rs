//! Integration tests for tracing initialization.

use pgconf::telemetry::{TracingConfig, init_tracing};

#[test]
fn tracing_initializes_once() {
    // Only this test touches the global subscriber in this binary.
    let first = init_tracing(TracingConfig {
        log_level: "pgconf=debug".to_string(),
    });
    assert!(first.is_ok(), "first init failed: {first:?}");

    let second = init_tracing(TracingConfig::default());
    assert!(second.is_err());
}
