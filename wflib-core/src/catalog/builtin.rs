//! Built-in catalog data
//!
//! The datasets shipped with the library, used whenever no external catalog
//! file is configured. Order here is display order.

use super::entry::{ActionEntry, ActionIcon, IconGlyph, Tint, WorkflowEntry, ALL_CATEGORIES};

/// Fixed language selector options for the workflow catalog
pub const WORKFLOW_LANGUAGES: [&str; 5] = [ALL_CATEGORIES, "JavaScript", "Python", "Go", "Rust"];

/// Fixed category selector options for the action catalog
pub const ACTION_CATEGORIES: [&str; 5] = [
    ALL_CATEGORIES,
    "PR Automation",
    "Issue Management",
    "Deployment",
    "Documentation",
];

const NODE_CI_CONTENT: &str = r#"name: Node.js CI

on:
  push:
    branches: [ main ]
  pull_request:
    branches: [ main ]

jobs:
  test:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        node-version: [14.x, 16.x, 18.x]

    steps:
      - uses: actions/checkout@v3

      - name: Use Node.js ${{ matrix.node-version }}
        uses: actions/setup-node@v3
        with:
          node-version: ${{ matrix.node-version }}
          cache: 'npm'

      - name: Install dependencies
        run: npm ci

      - name: Lint
        run: npm run lint

      - name: Test
        run: npm test

      - name: Build
        run: npm run build"#;

#[allow(clippy::too_many_arguments)]
fn workflow(
    id: &str,
    name: &str,
    description: &str,
    language: &str,
    (star_count, fork_count): (u64, u64),
    tags: &[&str],
    source_path: &str,
    content: &str,
) -> WorkflowEntry {
    WorkflowEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        language: language.to_string(),
        star_count,
        fork_count,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        source_path: source_path.to_string(),
        content: content.to_string(),
    }
}

fn action(
    id: &str,
    name: &str,
    description: &str,
    icon: ActionIcon,
    (star_count, download_count): (u64, u64),
    tags: &[&str],
) -> ActionEntry {
    ActionEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon,
        star_count,
        download_count,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        source_path: format!("actions/{id}/action.yml"),
        content: String::new(),
    }
}

/// The built-in workflow templates
pub fn workflow_templates() -> Vec<WorkflowEntry> {
    vec![
        workflow(
            "node-ci",
            "Node.js CI Pipeline",
            "Complete CI workflow for Node.js projects with testing, linting, and building",
            "JavaScript",
            (245, 89),
            &["CI", "Testing", "Linting", "Node.js"],
            "workflows/node-ci.yml",
            NODE_CI_CONTENT,
        ),
        workflow(
            "python-ci",
            "Python CI Pipeline",
            "CI workflow for Python projects with pytest, tox, and flake8",
            "Python",
            (189, 63),
            &["CI", "Testing", "Linting", "Python"],
            "workflows/python-ci.yml",
            "",
        ),
        workflow(
            "go-ci",
            "Go Build & Test",
            "Comprehensive CI workflow for Go projects with testing, linting, and security checks",
            "Go",
            (156, 42),
            &["CI", "Testing", "Go", "Security"],
            "workflows/go-ci.yml",
            "",
        ),
        workflow(
            "rust-ci",
            "Rust CI Pipeline",
            "CI workflow for Rust projects with cargo test, clippy, and cross-compilation",
            "Rust",
            (127, 38),
            &["CI", "Testing", "Rust", "Cross-compilation"],
            "workflows/rust-ci.yml",
            "",
        ),
        workflow(
            "node-deploy",
            "Node.js AWS Deployment",
            "Deploy Node.js applications to AWS with staging and production environments",
            "JavaScript",
            (178, 54),
            &["Deployment", "AWS", "Node.js", "Production"],
            "workflows/node-aws-deploy.yml",
            "",
        ),
        workflow(
            "docker-build",
            "Docker Build & Push",
            "Build and push Docker images to container registries with caching",
            "JavaScript",
            (212, 71),
            &["Docker", "Container", "Registry", "CI"],
            "workflows/docker-build.yml",
            "",
        ),
        workflow(
            "python-package",
            "Python Package Publishing",
            "Build and publish Python packages to PyPI with version bumping",
            "Python",
            (142, 47),
            &["Publishing", "PyPI", "Package", "Python"],
            "workflows/python-package.yml",
            "",
        ),
        workflow(
            "go-release",
            "Go Release Builder",
            "Build and release Go binaries for multiple platforms",
            "Go",
            (168, 52),
            &["Release", "Binary", "Cross-platform", "Go"],
            "workflows/go-release.yml",
            "",
        ),
        workflow(
            "rust-security",
            "Rust Security Scanner",
            "Security scanning for Rust projects using cargo-audit and other tools",
            "Rust",
            (115, 34),
            &["Security", "Scanning", "Rust", "Audit"],
            "workflows/rust-security.yml",
            "",
        ),
    ]
}

/// The built-in custom actions
pub fn custom_actions() -> Vec<ActionEntry> {
    vec![
        action(
            "auto-label",
            "Auto Label Action",
            "Automatically label pull requests based on file changes",
            ActionIcon::new(IconGlyph::Tag, Tint::Green),
            (178, 12453),
            &["PR Automation", "Labeling"],
        ),
        action(
            "auto-assign",
            "Auto Assign Reviewers",
            "Automatically assign reviewers to pull requests based on file paths",
            ActionIcon::new(IconGlyph::PullRequest, Tint::Blue),
            (156, 10872),
            &["PR Automation", "Code Review"],
        ),
        action(
            "security-scan",
            "Security Scanner",
            "Run security scans on your code and dependencies",
            ActionIcon::new(IconGlyph::Shield, Tint::Red),
            (203, 15678),
            &["Security", "Scanning"],
        ),
        action(
            "auto-merge",
            "Auto Merge Action",
            "Automatically merge pull requests when all checks pass",
            ActionIcon::new(IconGlyph::Merge, Tint::Purple),
            (142, 9254),
            &["PR Automation", "Merging"],
        ),
        action(
            "dependency-update",
            "Dependency Updater",
            "Automatically update dependencies and create pull requests",
            ActionIcon::new(IconGlyph::Tool, Tint::Orange),
            (189, 13452),
            &["Dependencies", "Maintenance"],
        ),
        action(
            "docs-generator",
            "Documentation Generator",
            "Generate documentation from code and comments",
            ActionIcon::new(IconGlyph::File, Tint::Teal),
            (112, 7859),
            &["Documentation", "Generation"],
        ),
        action(
            "deploy-notifier",
            "Deployment Notifier",
            "Send notifications to Slack, Teams, or Discord after deployments",
            ActionIcon::new(IconGlyph::Server, Tint::Green),
            (167, 11234),
            &["Deployment", "Notification"],
        ),
        action(
            "branch-cleanup",
            "Branch Cleanup",
            "Automatically delete branches after they've been merged",
            ActionIcon::new(IconGlyph::Branch, Tint::Blue),
            (138, 9876),
            &["Maintenance", "Git"],
        ),
        action(
            "issue-labeler",
            "Issue Labeler",
            "Automatically label issues based on content and keywords",
            ActionIcon::new(IconGlyph::Tag, Tint::Yellow),
            (121, 8543),
            &["Issue Management", "Labeling"],
        ),
    ]
}
