//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A small external catalog: two workflows, two actions
pub const SAMPLE_CATALOG: &str = r#"
workflows:
  - id: elixir-ci
    name: Elixir CI
    description: Mix test and credo for Elixir projects
    language: Elixir
    starCount: 12
    forkCount: 3
    tags: [CI, Testing, Elixir]
    sourcePath: workflows/elixir-ci.yml
    content: |
      name: Elixir CI
      on: [push]
  - id: zig-build
    name: Zig Build
    description: Build Zig projects
    language: Zig
    starCount: 40
    sourcePath: workflows/zig-build.yml
actions:
  - id: release-drafter
    name: Release Drafter
    description: Drafts release notes from merged pull requests
    icon: { glyph: file, tint: purple }
    starCount: 77
    downloadCount: 1200
    tags: [Release, Documentation]
    sourcePath: actions/release-drafter/action.yml
  - id: stale
    name: Stale Issues
    description: Closes inactive issues
    tags: [Issue Management]
    sourcePath: actions/stale/action.yml
"#;

/// Write `content` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, content: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, content)?;
    Ok(path)
}
