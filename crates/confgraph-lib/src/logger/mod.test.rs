use super::*;

#[test]
fn test_logger_not_initialized_initially() {
    // Note: This test assumes no other test has initialized the logger
    // In practice, we might need test isolation for the global logger
    assert!(!Logger::is_initialized() || Logger::global().is_some());
}

#[test]
fn test_filter_level_mapping_is_total() {
    // Every verbosity maps to a level the filter string accepts.
    for verbosity in 0..=5u8 {
        let level = LogLevel::from_verbosity(verbosity);
        assert!(matches!(
            level,
            LogLevel::Error
                | LogLevel::Warning
                | LogLevel::Info
                | LogLevel::Debug
                | LogLevel::Trace
        ));
    }
}
