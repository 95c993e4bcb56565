//! E2E tests for the resolve command
//!
//! Each test runs the real binary against a fixture graph definition and
//! asserts on the encoded payload.

use anyhow::Result;
use assert_cmd::Command;
use confgraph_lib::wire::InstallResponse;
use confgraph_tests::{DIAMOND_GRAPH, write_graph};
use predicates::prelude::*;
use tempfile::TempDir;

fn confgraph() -> Command {
    let mut cmd = Command::cargo_bin("confgraph").expect("binary built");
    cmd.env_remove("CONFGRAPH_GRAPH")
        .env_remove("CONFGRAPH_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn resolve_diamond_returns_deduplicated_items() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;

    let output = confgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["resolve", "1"])
        .output()?;
    assert!(output.status.success());

    let response: InstallResponse = serde_json::from_slice(&output.stdout)?;
    let mut values: Vec<&str> = response.items.iter().map(|i| i.value.as_str()).collect();
    values.sort_unstable();
    assert_eq!(
        values,
        vec!["app.conf", "base.conf", "net.conf", "shared.conf", "ui.conf"]
    );
    assert!(response.modules.is_empty());
    assert!(response.error.is_none());
    Ok(())
}

#[test]
fn resolve_with_modules_lists_full_closure() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;

    let output = confgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["resolve", "--with-modules", "1"])
        .output()?;
    assert!(output.status.success());

    let response: InstallResponse = serde_json::from_slice(&output.stdout)?;
    let ids: Vec<i64> = response.modules.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    Ok(())
}

#[test]
fn resolve_leaf_module_text_output_is_crlf() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;

    let output = confgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["resolve", "--format", "text", "4"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "base.conf\r\n");
    Ok(())
}

#[test]
fn resolve_grouped_text_has_labels_and_separators() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;

    let output = confgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["resolve", "--format", "text", "--with-modules", "4"])
        .output()?;
    assert!(output.status.success());

    let sep = "-".repeat(20);
    let expected = format!(
        "items\r\n{sep}\r\nbase.conf\r\n{sep}\r\nmodules\r\n{sep}\r\n4\r\n{sep}\r\n"
    );
    assert_eq!(String::from_utf8(output.stdout)?, expected);
    Ok(())
}

#[test]
fn resolve_from_request_file() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;
    let request = dir.path().join("request.json");
    std::fs::write(&request, r#"[{"id": 2}, {"id": 3}]"#)?;

    let output = confgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["resolve", "--request"])
        .arg(&request)
        .output()?;
    assert!(output.status.success());

    let response: InstallResponse = serde_json::from_slice(&output.stdout)?;
    let mut values: Vec<&str> = response.items.iter().map(|i| i.value.as_str()).collect();
    values.sort_unstable();
    assert_eq!(
        values,
        vec!["base.conf", "net.conf", "shared.conf", "ui.conf"]
    );
    Ok(())
}

#[test]
fn resolve_empty_request_yields_explicit_empty_collections() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;

    let output = confgraph()
        .arg("--graph")
        .arg(&graph)
        .arg("resolve")
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains(r#""items":[]"#));
    assert!(stdout.contains(r#""modules":[]"#));
    Ok(())
}

#[test]
fn malformed_request_is_rejected_before_resolution() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;
    let request = dir.path().join("request.json");
    std::fs::write(&request, "{broken")?;

    confgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["resolve", "--request"])
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid resolution request"))
        .stdout(predicate::str::contains(r#""error""#));
    Ok(())
}

#[test]
fn malformed_request_is_rejected_before_graph_is_read() -> Result<()> {
    let dir = TempDir::new()?;
    let request = dir.path().join("request.json");
    std::fs::write(&request, "{broken")?;

    // The graph path points nowhere; validation must fail first.
    confgraph()
        .arg("--graph")
        .arg(dir.path().join("absent.toml"))
        .args(["resolve", "--request"])
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid resolution request"));
    Ok(())
}

#[test]
fn module_reference_without_identity_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;
    let request = dir.path().join("request.json");
    std::fs::write(&request, r#"[{"value": "app"}]"#)?;

    confgraph()
        .arg("--graph")
        .arg(&graph)
        .args(["resolve", "--request"])
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid resolution request"));
    Ok(())
}

#[test]
fn missing_graph_configuration_is_an_error() {
    confgraph()
        .args(["resolve", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("graph"));
}

#[test]
fn graph_path_can_come_from_environment() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;

    confgraph()
        .env("CONFGRAPH_GRAPH", &graph)
        .args(["resolve", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base.conf"));
    Ok(())
}
