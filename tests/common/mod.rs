//! Common test utilities for schema scanning and validation tests.
//!
//! This module provides assertion macros, logging setup and shared fixtures
//! used across the unit and integration suites.


use std::sync::Once;

static LOGGING: Once = Once::new();

/// Route `log` output through `env_logger` once per test binary.
///
/// Set `RUST_LOG=dirschema=trace` to see every scanned label.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Custom assertion macro for validation errors
#[macro_export]
macro_rules! assert_validation_error {
    ($result:expr, $error_variant:pat) => {
        match $result {
            Err(dirschema::SchemaError::Validation($error_variant)) => {
                // Specific error type matched
            }
            Ok(_) => panic!("Expected validation error, but scanning succeeded"),
            Err(other) => panic!("Expected specific validation error, got {:?}", other),
        }
    };
}

/// Custom assertion macro for scanner and registry errors
#[macro_export]
macro_rules! assert_schema_error {
    ($result:expr, $error_variant:pat) => {
        match $result {
            Err($error_variant) => {}
            Ok(_) => panic!("Expected schema error, but the operation succeeded"),
            Err(other) => panic!("Expected specific schema error, got {:?}", other),
        }
    };
}

/// Custom assertion macro for specific error messages
#[macro_export]
macro_rules! assert_error_message_contains {
    ($result:expr, $substring:expr) => {
        match $result {
            Err(err) => assert!(
                err.to_string().contains($substring),
                "Error message '{}' does not contain '{}'",
                err.to_string(),
                $substring
            ),
            Ok(_) => panic!(
                "Expected error containing '{}', but the operation succeeded",
                $substring
            ),
        }
    };
}

/// Marshal, render, marshal again, and check both scans agree.
///
/// Returns the rendered text.
#[macro_export]
macro_rules! assert_round_trip {
    ($kind:ty, $schema:expr, $raw:expr) => {{
        use dirschema::Unmarshal as _;
        let first: $kind = $schema
            .marshal($raw)
            .unwrap_or_else(|e| panic!("Failed to scan '{}': {}", $raw, e));
        let rendered = first.unmarshal().expect("Failed to render");
        let second: $kind = $schema
            .marshal(&rendered)
            .unwrap_or_else(|e| panic!("Failed to rescan '{}': {}", rendered, e));
        assert_eq!(first, second, "Round trip changed '{}'", $raw);
        rendered
    }};
}
