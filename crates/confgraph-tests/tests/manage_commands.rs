//! E2E tests for the entity listing commands

use anyhow::Result;
use assert_cmd::Command;
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
fn items_listing_shows_every_row() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;

    confgraph()
        .arg("--graph")
        .arg(&graph)
        .arg("items")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"Value: "base.conf""#))
        .stdout(predicate::str::contains(r#"Type: "ini""#));
    Ok(())
}

#[test]
fn modules_listing_shows_names_and_versions() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;

    confgraph()
        .arg("--graph")
        .arg(&graph)
        .arg("modules")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"ID: 1, Value: "app", Version: "1.0""#));
    Ok(())
}

#[test]
fn associations_listing_shows_edges() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;

    confgraph()
        .arg("--graph")
        .arg(&graph)
        .arg("associations")
        .assert()
        .success()
        .stdout(predicate::str::contains("ItemID: 1, ModuleID: 1"));
    Ok(())
}

#[test]
fn dependencies_listing_shows_directed_pairs() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, DIAMOND_GRAPH)?;

    confgraph()
        .arg("--graph")
        .arg(&graph)
        .arg("dependencies")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependent: 1, Dependee: 2"))
        .stdout(predicate::str::contains("Dependent: 3, Dependee: 4"));
    Ok(())
}

#[test]
fn empty_graph_lists_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(&dir, "")?;

    confgraph()
        .arg("--graph")
        .arg(&graph)
        .arg("items")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn duplicate_dependency_in_definition_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = write_graph(
        &dir,
        "[[dependencies]]\ndependent = 1\ndependee = 2\n\n[[dependencies]]\ndependent = 1\ndependee = 2\n",
    )?;

    confgraph()
        .arg("--graph")
        .arg(&graph)
        .arg("dependencies")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load graph definition"));
    Ok(())
}
