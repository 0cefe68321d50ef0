//! End-to-end tests for the `wflib` binary
//!
//! Each run gets an empty config home so a developer's own config file or
//! catalog variable never leaks into the results.

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SAMPLE_CATALOG: &str = r#"
workflows:
  - id: elixir-ci
    name: Elixir CI
    description: Mix test and credo for Elixir projects
    language: Elixir
    starCount: 12
    tags: [CI, Testing]
    sourcePath: workflows/elixir-ci.yml
    content: |
      name: Elixir CI
      on: [push]
actions:
  - id: stale
    name: Stale Issues
    description: Closes inactive issues
    tags: [Issue Management]
    sourcePath: actions/stale/action.yml
"#;

fn wflib(home: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_wflib"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("WFLIB_CATALOG")
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_workflows_filtered_by_language() -> Result<()> {
    let home = TempDir::new()?;
    let output = wflib(home.path(), &["workflows", "--language", "Go"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Found 2 workflow(s)"));
    assert!(out.contains("Go Build & Test"));
    assert!(out.contains("Go Release Builder"));
    assert!(!out.contains("Node.js CI Pipeline"));
    Ok(())
}

#[test]
fn test_workflows_json_keeps_catalog_order() -> Result<()> {
    let home = TempDir::new()?;
    let output = wflib(home.path(), &["workflows", "ci", "--json"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout)?;
    let ids: Vec<&str> = entries.iter().filter_map(|e| e["id"].as_str()).collect();
    assert_eq!(
        ids,
        vec!["node-ci", "python-ci", "go-ci", "rust-ci", "docker-build"]
    );
    Ok(())
}

#[test]
fn test_actions_filtered_by_tag_category() -> Result<()> {
    let home = TempDir::new()?;
    let output = wflib(home.path(), &["actions", "--category", "Deployment", "--json"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout)?;
    assert!(!entries.is_empty());
    for entry in &entries {
        let tags = entry["tags"].as_array().cloned().unwrap_or_default();
        assert!(tags.iter().any(|t| t == "Deployment"), "{entry}");
    }
    Ok(())
}

#[test]
fn test_no_matches_shows_empty_state() -> Result<()> {
    let home = TempDir::new()?;
    let output = wflib(home.path(), &["workflows", "haskell"])?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("No workflows match your filters."));
    assert!(out.contains("Clear filters"));
    Ok(())
}

#[test]
fn test_show_prints_content() -> Result<()> {
    let home = TempDir::new()?;
    let output = wflib(home.path(), &["show", "node-ci"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Workflow: Node.js CI Pipeline"));
    assert!(out.contains("name: Node.js CI"));
    Ok(())
}

#[test]
fn test_show_unknown_id_fails() -> Result<()> {
    let home = TempDir::new()?;
    let output = wflib(home.path(), &["show", "does-not-exist"])?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("does-not-exist"));
    Ok(())
}

#[test]
fn test_docs_unknown_tab_lists_available() -> Result<()> {
    let home = TempDir::new()?;
    let output = wflib(home.path(), &["docs", "--tab", "nope"])?;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Unknown tab 'nope'"));
    assert!(err.contains("getting-started"));
    Ok(())
}

#[test]
fn test_docs_expand_opens_section() -> Result<()> {
    let home = TempDir::new()?;

    let collapsed = stdout(&wflib(home.path(), &["docs"])?);
    assert!(collapsed.contains("▸ Setting Up Your First Workflow"));

    let expanded = stdout(&wflib(home.path(), &["docs", "--expand", "setup"])?);
    assert!(expanded.contains("▾ Setting Up Your First Workflow"));
    assert!(expanded.contains("```yaml"));
    Ok(())
}

#[test]
fn test_external_catalog_flag() -> Result<()> {
    let home = TempDir::new()?;
    let catalog = home.path().join("catalog.yaml");
    std::fs::write(&catalog, SAMPLE_CATALOG)?;

    let output = wflib(
        home.path(),
        &["--catalog", catalog.to_str().unwrap_or_default(), "workflows", "--json"],
    )?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "elixir-ci");
    Ok(())
}

#[test]
fn test_config_file_sets_json_output() -> Result<()> {
    let home = TempDir::new()?;
    let config = home.path().join("config.yaml");
    std::fs::write(&config, "default_output: json\n")?;

    let output = wflib(
        home.path(),
        &["--config", config.to_str().unwrap_or_default(), "actions"],
    )?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(entries.len(), 9);
    Ok(())
}

#[test]
fn test_missing_catalog_file_fails() -> Result<()> {
    let home = TempDir::new()?;
    let output = wflib(home.path(), &["--catalog", "/nonexistent/catalog.yaml", "workflows"])?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load catalog"));
    Ok(())
}

#[test]
fn test_pages_lists_routes() -> Result<()> {
    let home = TempDir::new()?;
    let output = wflib(home.path(), &["pages"])?;

    assert!(output.status.success());
    let out = stdout(&output);
    for route in ["/workflows", "/custom-actions", "/documentation", "/developer-tools", "/examples"] {
        assert!(out.contains(route), "missing {route}");
    }
    Ok(())
}
