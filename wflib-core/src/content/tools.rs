//! Developer tools page, plus the usage snippet of the custom actions page

use super::{bullets, checklist, cards, heading, paragraph, section, snippet, steps, Page, TabbedPage};
use crate::snippet::CodeSnippet;

const CLI_INSTALL: &str = r#"# Install via npm
npm install -g @workflow-library/cli

# Install via pip (for Python users)
pip install workflow-library-cli"#;

const CLI_USAGE: &str = r#"# Initialize a new project
workflow-lib init node

# Add a testing workflow
workflow-lib add test-node

# Validate your workflows
workflow-lib validate"#;

const LOCAL_TESTING: &str = r#"# Run a workflow locally
workflow-lib run test-workflow

# Debug a workflow step by step
workflow-lib debug deploy-workflow

# Validate a workflow against GitHub Actions schema
workflow-lib validate workflow.yml"#;

const CUSTOM_RULES: &str = r#"module.exports = {
  rules: {
    'require-timeout': {
      description: 'All jobs must have a timeout specified',
      severity: 'warning',
      test: (workflow) => {
        const jobs = workflow.jobs || {};
        return Object.values(jobs).every(job => job.timeout-minutes);
      }
    }
  }
}"#;

/// Shown above the custom actions catalog
pub const CUSTOM_ACTION_USAGE: &str = r#"name: Use Custom Action
on: [push, pull_request]

jobs:
  auto-label:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v3

      - name: Auto Label PR
        uses: workflow-library/auto-label-action@v1
        with:
          github-token: ${{ secrets.GITHUB_TOKEN }}
          config-path: '.github/labels.yml'"#;

/// The "How to Use Custom Actions" snippet
pub fn custom_action_usage() -> CodeSnippet {
    CodeSnippet::new(CUSTOM_ACTION_USAGE, "yaml").titled("Example Usage")
}

/// Build the developer tools page
pub fn developer_tools_page() -> TabbedPage {
    let cli = section(
        "cli",
        "CLI Tool",
        vec![
            heading("Workflow Library CLI"),
            paragraph(
                "Our Command Line Interface (CLI) tool allows you to generate, validate, and manage GitHub Actions workflows directly from your terminal.",
            ),
            heading("Installation"),
            snippet(CLI_INSTALL, "bash", None),
            heading("Basic Usage"),
            snippet(CLI_USAGE, "bash", None),
            heading("Key Features"),
            checklist(&[
                "Generate workflow templates for any project type",
                "Validate workflows against best practices",
                "Customize workflows with interactive prompts",
                "Update existing workflows to latest versions",
                "Run workflows locally for testing",
                "Share configurations across projects",
            ]),
        ],
    );

    let vscode = section(
        "vscode",
        "VS Code Extension",
        vec![
            heading("VS Code Extension"),
            paragraph(
                "Our Visual Studio Code extension provides a graphical interface for working with GitHub Actions workflows, making it easier to create, edit, and manage your CI/CD pipelines.",
            ),
            heading("Extension Features"),
            checklist(&[
                "Workflow template browsing and previewing",
                "One-click workflow addition to your project",
                "Syntax highlighting for workflow files",
                "Inline validation and error checking",
                "Quick access to documentation",
                "Run and debug workflows locally",
            ]),
            heading("Installation"),
            steps(&[
                "Open VS Code and navigate to the Extensions view by clicking on the Extensions icon in the Activity Bar.",
                "Search for \"GitHub Actions Workflow Library\" in the Extensions view search box.",
                "Click the Install button on the GitHub Actions Workflow Library extension.",
                "After installation, you can access the extension features from the GitHub Actions icon in the Activity Bar.",
            ]),
        ],
    );

    let testing = section(
        "testing",
        "Local Testing",
        vec![
            heading("Local Workflow Testing"),
            paragraph(
                "Test your GitHub Actions workflows locally before pushing them to your repository, saving time and reducing the number of failed workflow runs.",
            ),
            heading("Testing Commands"),
            snippet(LOCAL_TESTING, "bash", None),
            heading("Benefits of Local Testing"),
            checklist(&[
                "Faster feedback loop during development",
                "Identify issues before committing to GitHub",
                "Test with different inputs and environments",
                "Debug workflow steps interactively",
                "Reduce GitHub Actions usage minutes",
            ]),
            heading("How It Works"),
            paragraph(
                "Our local testing utility uses Docker to simulate the GitHub Actions runner environment, allowing you to run your workflows locally with the same conditions as on GitHub.",
            ),
            cards(&[
                ("1. Setup", "The tool creates a Docker container with the appropriate runner environment."),
                ("2. Execution", "Your workflow is executed step by step in the containerized environment."),
                ("3. Feedback", "You receive detailed logs and can interact with the workflow as it runs."),
            ]),
        ],
    );

    let config = section(
        "config",
        "Configuration Validators",
        vec![
            heading("Configuration Validators"),
            paragraph(
                "Ensure your GitHub Actions workflows follow best practices and are free of common errors with our configuration validation tools.",
            ),
            heading("What We Validate"),
            checklist(&[
                "Syntax and schema validation",
                "Security best practices",
                "Performance optimizations",
                "Compatibility with GitHub Actions versions",
                "Action input/output validation",
                "Environment and secret usage",
            ]),
            heading("Integration Options"),
            bullets(&[
                "Command line validation",
                "VS Code extension integration",
                "Pre-commit hook integration",
                "CI/CD pipeline integration",
                "GitHub App for automated PR checks",
            ]),
            heading("Custom Validation Rules"),
            paragraph(
                "Create custom validation rules specific to your organization's requirements:",
            ),
            snippet(CUSTOM_RULES, "javascript", Some("custom-rules.js")),
        ],
    );

    TabbedPage {
        page: Page::DeveloperTools,
        title: "Developer Tools".to_string(),
        subtitle: "Productivity tools to help you work more efficiently with GitHub Actions workflows".to_string(),
        tabs: vec![cli, vscode, testing, config],
        default_tab: "cli".to_string(),
    }
}
