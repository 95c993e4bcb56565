// Tests for command execution

use super::*;

const GRAPH_FIXTURE: &str = r#"
[[items]]
id = 1
value = "core.conf"
type = "ini"
version = "1.0"

[[modules]]
id = 1
value = "core"

[[modules]]
id = 2
value = "extras"

[[associations]]
item = 1
module = 1

[[dependencies]]
dependent = 2
dependee = 1
"#;

fn graph_config(dir: &tempfile::TempDir) -> AppConfig {
    let path = dir.path().join("graph.toml");
    std::fs::write(&path, GRAPH_FIXTURE).unwrap();
    AppConfig {
        graph: Some(path),
        ..AppConfig::default()
    }
}

#[test]
fn test_execute_without_command_prints_hint() {
    let config = CliConfig {
        app_config: AppConfig::default(),
        command: None,
    };
    assert!(execute_command(config).is_ok());
}

#[test]
fn test_open_store_requires_graph_path() {
    let err = open_store(&AppConfig::default()).unwrap_err();
    assert!(err.to_string().contains("graph"));
}

#[test]
fn test_open_store_reports_missing_file() {
    let config = AppConfig {
        graph: Some("/nonexistent/graph.toml".into()),
        ..AppConfig::default()
    };
    let err = open_store(&config).unwrap_err();
    assert!(err.to_string().contains("could not load graph definition"));
}

#[test]
fn test_resolve_by_ids_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let config = graph_config(&dir);
    handle_resolve(&config, &[2], None, true, Encoding::Json).unwrap();
}

#[test]
fn test_resolve_from_request_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = graph_config(&dir);
    let request = dir.path().join("request.json");
    std::fs::write(&request, r#"[{"id": 2}]"#).unwrap();

    handle_resolve(&config, &[], Some(&request), false, Encoding::Text).unwrap();
}

#[test]
fn test_resolve_rejects_malformed_request() {
    let dir = tempfile::tempdir().unwrap();
    let config = graph_config(&dir);
    let request = dir.path().join("request.json");
    std::fs::write(&request, "{broken").unwrap();

    let err = handle_resolve(&config, &[], Some(&request), false, Encoding::Json).unwrap_err();
    assert!(err.to_string().contains("invalid resolution request"));
}

#[test]
fn test_request_validation_precedes_graph_loading() {
    let dir = tempfile::tempdir().unwrap();
    let request = dir.path().join("request.json");
    std::fs::write(&request, "{broken").unwrap();
    let config = AppConfig {
        graph: Some("/nonexistent/graph.toml".into()),
        ..AppConfig::default()
    };

    // The request is rejected as client input, not as a graph-load failure.
    let err = handle_resolve(&config, &[], Some(&request), false, Encoding::Json).unwrap_err();
    assert!(err.to_string().contains("invalid resolution request"));
    assert!(!err.to_string().contains("could not load graph definition"));
}

#[test]
fn test_resolve_rejects_zero_id() {
    let dir = tempfile::tempdir().unwrap();
    let config = graph_config(&dir);

    let err = handle_resolve(&config, &[0], None, false, Encoding::Json).unwrap_err();
    assert!(err.to_string().contains("invalid resolution request"));
}

#[test]
fn test_listing_handlers_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&graph_config(&dir)).unwrap();
    handle_items(&store).unwrap();
    handle_modules(&store).unwrap();
    handle_associations(&store).unwrap();
    handle_dependencies(&store).unwrap();
}
