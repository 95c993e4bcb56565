use confgraph_lib::application::config::AppConfig;
use confgraph_lib::primitives::{LogFormat, LogOutput};
use std::path::PathBuf;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.graph.is_none());
    assert!(config.log_level <= 4);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig {
        graph: Some(PathBuf::from("base.toml")),
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    // Override values should be preserved
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.log_format, LogFormat::Json);

    // The graph path survives when the override leaves it unset
    assert_eq!(merged.graph, Some(PathBuf::from("base.toml")));
}
