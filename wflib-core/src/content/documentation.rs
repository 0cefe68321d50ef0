//! Documentation page

use super::{
    accordion, bullets, cards, checklist, heading, paragraph, section, snippet, steps, Page,
    TabbedPage,
};

/// Accordions open when the page is first shown
pub const DEFAULT_EXPANDED: [&str; 1] = ["intro"];

const BASIC_WORKFLOW: &str = r#"name: Basic CI

on:
  push:
    branches: [ main ]
  pull_request:
    branches: [ main ]

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v3
      - name: Set up Node.js
        uses: actions/setup-node@v3
        with:
          node-version: '16'
      - name: Install dependencies
        run: npm ci
      - name: Run tests
        run: npm test"#;

const CLI_CONFIG: &str = r#"module.exports = {
  project: {
    type: 'node',
    framework: 'express',
    test: 'jest'
  },
  workflows: {
    ci: {
      branches: ['main', 'develop'],
      nodeVersions: ['14', '16']
    },
    deploy: {
      environments: ['staging', 'production'],
      provider: 'aws'
    }
  }
}"#;

/// Build the documentation page
pub fn documentation_page() -> TabbedPage {
    let getting_started = section(
        "getting-started",
        "Getting Started",
        vec![
            heading("Getting Started with GitHub Actions"),
            accordion(
                "intro",
                "Introduction to GitHub Actions",
                vec![
                    paragraph(
                        "GitHub Actions is a powerful automation platform that allows you to automate your software development workflows right in your GitHub repository. With GitHub Actions, you can build, test, and deploy your code, as well as automate other tasks related to your GitHub workflow.",
                    ),
                    heading("Key concepts:"),
                    bullets(&[
                        "Workflows: Automated procedures that you add to your repository.",
                        "Events: Specific activities that trigger a workflow run.",
                        "Jobs: A set of steps that execute on the same runner.",
                        "Steps: Individual tasks that can run commands or actions.",
                        "Actions: Reusable units of code that can be used in workflows.",
                        "Runners: Servers that run your workflows when they're triggered.",
                    ]),
                ],
            ),
            accordion(
                "setup",
                "Setting Up Your First Workflow",
                vec![
                    paragraph(
                        "To create your first GitHub Actions workflow, you need to create a YAML file in the .github/workflows directory of your repository. Here's a step-by-step guide:",
                    ),
                    steps(&[
                        "Create a .github/workflows directory in your repository if it doesn't already exist.",
                        "Create a new file, e.g., ci.yml, in the workflows directory.",
                        "Add the following YAML configuration to define a basic workflow:",
                    ]),
                    snippet(BASIC_WORKFLOW, "yaml", None),
                    paragraph(
                        "Commit and push the file to your repository. GitHub will automatically detect the workflow file and start running it based on the defined triggers.",
                    ),
                ],
            ),
            accordion(
                "usage",
                "Using Workflow Templates",
                vec![
                    paragraph(
                        "Our workflow library provides templates for common CI/CD scenarios that you can easily adapt to your projects. Here's how to use them:",
                    ),
                    checklist(&[
                        "Browse the Workflow Templates section to find a template that matches your needs.",
                        "Copy the template YAML to your .github/workflows directory.",
                        "Customize the template to match your project's specific requirements.",
                        "Commit and push the workflow file to your repository.",
                        "Monitor the workflow runs in the Actions tab of your GitHub repository.",
                    ]),
                ],
            ),
            accordion(
                "advanced",
                "Advanced Workflow Concepts",
                vec![
                    paragraph(
                        "Once you're comfortable with basic workflows, you can explore more advanced GitHub Actions features:",
                    ),
                    cards(&[
                        ("Matrix Builds", "Test your code against multiple versions of languages, operating systems, or dependencies."),
                        ("Workflow Reuse", "Use reusable workflows to share common job configurations across multiple workflows."),
                        ("Environment Secrets", "Securely store and use sensitive information like API keys and credentials."),
                        ("Workflow Artifacts", "Share data between jobs and persist build outputs for later use."),
                        ("Custom Actions", "Create your own actions to encapsulate common functionality and share across repositories."),
                    ]),
                ],
            ),
        ],
    );

    let workflows = section(
        "workflows",
        "Workflow Templates",
        vec![
            heading("Workflow Templates Documentation"),
            paragraph(
                "Detailed documentation for each workflow template in our library, including usage instructions and customization options.",
            ),
            heading("Template Categories"),
            cards(&[
                ("Testing Pipelines", "Workflows for unit testing, integration testing, and end-to-end testing."),
                ("Code Quality", "Workflows for linting, code formatting, and security scanning."),
                ("Deployment", "Workflows for continuous deployment to various environments."),
                ("Release Management", "Workflows for versioning, changelogs, and release automation."),
            ]),
            heading("Documentation Structure"),
            paragraph("Each workflow template in our library includes the following documentation:"),
            bullets(&[
                "Overview: A brief description of what the workflow does.",
                "Use Cases: Common scenarios where the workflow is useful.",
                "Requirements: Prerequisites for using the workflow.",
                "Configuration: Available configuration options.",
                "Examples: Sample implementations for different scenarios.",
                "Troubleshooting: Common issues and their solutions.",
            ]),
            heading("Language-Specific Templates"),
            paragraph("Our library includes workflow templates optimized for the following languages:"),
            bullets(&[
                "JavaScript/TypeScript: Including Node.js, React, Vue, and other JS frameworks.",
                "Python: Supporting various versions and popular frameworks like Django and Flask.",
                "Go: With support for different Go versions and testing frameworks.",
                "Rust: Including cargo-based workflows and cross-compilation.",
            ]),
        ],
    );

    let actions = section(
        "actions",
        "Custom Actions",
        vec![
            heading("Custom Actions Documentation"),
            heading("Types of Custom Actions"),
            paragraph("GitHub Actions can be implemented in different ways:"),
            cards(&[
                ("JavaScript Actions", "Written in JavaScript/TypeScript and run directly on the GitHub Actions runner."),
                ("Docker Container Actions", "Packaged in Docker containers, allowing for complex dependencies."),
                ("Composite Actions", "Combine multiple workflow steps into a single action."),
            ]),
            heading("Action Documentation Structure"),
            paragraph("Each custom action in our library includes the following documentation:"),
            bullets(&[
                "Description: What the action does.",
                "Inputs: Required and optional inputs with descriptions.",
                "Outputs: Values that the action produces.",
                "Usage Examples: Code snippets showing how to use the action.",
                "Implementation Details: How the action works internally.",
            ]),
            heading("Creating Your Own Actions"),
            steps(&[
                "Create a new repository for your action.",
                "Add the necessary files (action.yml, source code).",
                "Write thorough documentation.",
                "Publish the action to the GitHub Marketplace (optional).",
                "Use semantic versioning for releases.",
            ]),
            heading("Testing Custom Actions"),
            paragraph("Before publishing your action, ensure it's thoroughly tested:"),
            bullets(&[
                "Write unit tests for your action's code.",
                "Create integration tests that use your action in workflows.",
                "Test with different input combinations.",
                "Verify outputs are as expected.",
            ]),
        ],
    );

    let cli = section(
        "cli",
        "CLI Tool",
        vec![
            heading("CLI Tool Documentation"),
            paragraph(
                "Documentation for our workflow generation CLI tool, installation instructions, and usage examples.",
            ),
            heading("Installation"),
            snippet("npm install -g @workflow-library/cli", "bash", Some("Install via npm")),
            paragraph("Alternatively, you can install using pip:"),
            snippet("pip install workflow-library-cli", "bash", Some("Install via pip")),
            heading("CLI Commands"),
            heading("Initialize a Project"),
            snippet("workflow-lib init [project-type]", "bash", None),
            paragraph("Creates a basic workflow configuration for your project based on the project type."),
            heading("Add a Workflow"),
            snippet("workflow-lib add [workflow-name]", "bash", None),
            paragraph("Adds a specific workflow template to your project."),
            heading("Validate Workflows"),
            snippet("workflow-lib validate", "bash", None),
            paragraph("Validates your workflow files against best practices and checks for errors."),
            heading("Update Workflows"),
            snippet("workflow-lib update", "bash", None),
            paragraph("Updates your workflows to the latest versions from the library."),
            heading("Configuration"),
            paragraph(
                "The CLI tool uses a configuration file (workflow-lib.config.js) to customize its behavior. Here's an example configuration:",
            ),
            snippet(CLI_CONFIG, "javascript", Some("workflow-lib.config.js")),
            heading("VS Code Extension"),
            paragraph("Our VS Code extension provides a graphical interface for the CLI tool, making it easier to:"),
            bullets(&[
                "Browse available workflow templates",
                "Add workflows to your project",
                "Edit workflow configurations",
                "Validate workflows",
                "View workflow run results",
            ]),
        ],
    );

    TabbedPage {
        page: Page::Documentation,
        title: "Documentation".to_string(),
        subtitle: "Comprehensive guides and reference documentation for using the GitHub Actions Workflow Library".to_string(),
        tabs: vec![getting_started, workflows, actions, cli],
        default_tab: "getting-started".to_string(),
    }
}

#[cfg(test)]
mod documentation_tests {
    use super::*;

    #[test]
    fn test_tabs_in_order() {
        let page = documentation_page();
        assert_eq!(
            page.tab_ids(),
            vec!["getting-started", "workflows", "actions", "cli"]
        );
    }

    #[test]
    fn test_getting_started_accordions() {
        let page = documentation_page();
        let tab = page.tab("getting-started").unwrap();
        assert_eq!(tab.accordion_ids(), vec!["intro", "setup", "usage", "advanced"]);
        // The basic workflow lives inside the "setup" accordion
        assert_eq!(tab.snippets().len(), 1);
        assert!(tab.snippets()[0].code.starts_with("name: Basic CI"));
    }
}
