// Tests for application configuration

use super::*;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert!(config.graph.is_none());
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
}

#[test]
fn test_merge_takes_resolved_values() {
    let base = AppConfig::default();
    let other = AppConfig {
        graph: Some(PathBuf::from("graph.toml")),
        log_level: 3,
        log_format: LogFormat::Json,
        log_output: LogOutput::Stdout,
    };

    let merged = base.merge_with(other);
    assert_eq!(merged.graph.as_deref(), Some(Path::new("graph.toml")));
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.log_format, LogFormat::Json);
}

#[test]
fn test_merge_keeps_graph_when_other_is_unset() {
    let base = AppConfig {
        graph: Some(PathBuf::from("base.toml")),
        ..AppConfig::default()
    };
    let merged = base.merge_with(AppConfig::default());
    assert_eq!(merged.graph.as_deref(), Some(Path::new("base.toml")));
}

#[test]
fn test_validate_rejects_out_of_range_log_level() {
    let config = AppConfig {
        log_level: 9,
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_graph_path_required() {
    let config = AppConfig::default();
    assert!(matches!(
        config.graph_path(),
        Err(ConfigError::MissingField { .. })
    ));
}

#[test]
fn test_logger_config_mapping() {
    let config = AppConfig {
        log_level: 2,
        ..AppConfig::default()
    };
    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Info);
    assert_eq!(logger.format, LogFormat::Text);
}
