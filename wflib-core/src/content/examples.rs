//! Examples page: one section per example category

use super::{cards, checklist, heading, paragraph, section, snippet, Page, TabbedPage};

const NODE_CI: &str = r#"name: Node.js CI

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

const AWS_DEPLOY: &str = r#"name: Deploy to Production

on:
  push:
    branches: [ main ]

jobs:
  deploy:
    runs-on: ubuntu-latest
    environment: production

    steps:
      - uses: actions/checkout@v3

      - name: Set up Node.js
        uses: actions/setup-node@v3
        with:
          node-version: '16'
          cache: 'npm'

      - name: Install dependencies
        run: npm ci

      - name: Build
        run: npm run build

      - name: Deploy to AWS
        uses: workflow-library/aws-s3-deploy@v1
        with:
          aws-access-key-id: ${{ secrets.AWS_ACCESS_KEY_ID }}
          aws-secret-access-key: ${{ secrets.AWS_SECRET_ACCESS_KEY }}
          aws-region: us-west-2
          s3-bucket: my-app-production
          source-dir: ./build"#;

const PR_AUTOMATION: &str = r#"name: PR Automation

on:
  pull_request:
    types: [opened, synchronize, reopened, labeled, unlabeled]

jobs:
  triage:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v3

      - name: Auto Label
        uses: workflow-library/auto-label-action@v1
        with:
          github-token: ${{ secrets.GITHUB_TOKEN }}
          config-path: '.github/labeler.yml'

      - name: Assign Reviewers
        uses: workflow-library/auto-assign-action@v1
        with:
          github-token: ${{ secrets.GITHUB_TOKEN }}
          config-path: '.github/reviewers.yml'

      - name: Size Check
        uses: workflow-library/pr-size-checker@v1
        with:
          github-token: ${{ secrets.GITHUB_TOKEN }}
          max-lines-changed: 500"#;

const LABELER_CONFIG: &str = r#"# .github/labeler.yml
documentation:
  - changed-files:
    - any-glob-to-any-file: ['docs/**/*', '**/*.md']

frontend:
  - changed-files:
    - any-glob-to-any-file: ['src/components/**/*', 'src/pages/**/*']

backend:
  - changed-files:
    - any-glob-to-any-file: ['server/**/*', 'api/**/*']

dependencies:
  - changed-files:
    - any-glob-to-any-file: ['package.json', 'yarn.lock', 'go.mod']

tests:
  - changed-files:
    - any-glob-to-any-file: ['**/*.test.js', '**/*.spec.ts', 'tests/**/*']"#;

const RELEASE: &str = r#"name: Release Management

on:
  push:
    branches: [ main ]

jobs:
  release:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v3
        with:
          fetch-depth: 0

      - name: Set up Node.js
        uses: actions/setup-node@v3
        with:
          node-version: '16'
          cache: 'npm'

      - name: Install dependencies
        run: npm ci

      - name: Build
        run: npm run build

      - name: Generate Release Notes
        id: release_notes
        uses: workflow-library/changelog-generator@v1
        with:
          github-token: ${{ secrets.GITHUB_TOKEN }}

      - name: Create Release
        uses: actions/create-release@v1
        env:
          GITHUB_TOKEN: ${{ secrets.GITHUB_TOKEN }}
        with:
          tag_name: v${{ steps.release_notes.outputs.version }}
          release_name: Release v${{ steps.release_notes.outputs.version }}
          body: ${{ steps.release_notes.outputs.changelog }}
          draft: false
          prerelease: false"#;

const MONOREPO: &str = r#"name: Monorepo CI

on:
  push:
    branches: [ main ]
  pull_request:
    branches: [ main ]

jobs:
  changes:
    runs-on: ubuntu-latest
    outputs:
      packages: ${{ steps.filter.outputs.changes }}
    steps:
      - uses: actions/checkout@v3

      - name: Filter changes
        id: filter
        uses: workflow-library/monorepo-changes@v1
        with:
          config-path: '.github/monorepo.yml'

  build:
    needs: changes
    if: ${{ needs.changes.outputs.packages != '[]' }}
    runs-on: ubuntu-latest
    strategy:
      matrix:
        package: ${{ fromJson(needs.changes.outputs.packages) }}

    steps:
      - uses: actions/checkout@v3

      - name: Set up Node.js
        uses: actions/setup-node@v3
        with:
          node-version: '16'
          cache: 'npm'

      - name: Install dependencies
        run: cd packages/${{ matrix.package }} && npm ci

      - name: Test
        run: cd packages/${{ matrix.package }} && npm test

      - name: Build
        run: cd packages/${{ matrix.package }} && npm run build"#;

const MONOREPO_CONFIG: &str = r#"# .github/monorepo.yml
packages:
  - name: api
    path: packages/api
    dependencies:
      - common
    triggers:
      - packages/api/**
      - packages/common/**

  - name: web
    path: packages/web
    dependencies:
      - common
      - ui-components
    triggers:
      - packages/web/**
      - packages/common/**
      - packages/ui-components/**

  - name: common
    path: packages/common
    triggers:
      - packages/common/**"#;

/// Build the examples page
pub fn examples_page() -> TabbedPage {
    let ci = section(
        "ci-pipelines",
        "CI Pipelines",
        vec![
            heading("CI Pipeline Examples"),
            paragraph(
                "Continuous Integration (CI) pipelines are essential for ensuring code quality and preventing integration issues. Here are some examples of CI pipelines for different languages and frameworks.",
            ),
            heading("Node.js CI Pipeline"),
            snippet(NODE_CI, "yaml", Some("node-ci.yml")),
            heading("Key Features"),
            checklist(&[
                "Matrix testing across multiple Node.js versions",
                "Dependency caching for faster builds",
                "Comprehensive lint, test, and build steps",
                "Runs on both push to main and pull requests",
            ]),
            heading("Additional CI Examples"),
            cards(&[
                ("Python CI Pipeline", "CI workflow for Python projects using pytest and tox."),
                ("Go CI Pipeline", "CI workflow for Go projects with testing and linting."),
                ("Rust CI Pipeline", "CI workflow for Rust projects using cargo test and clippy."),
                ("Frontend CI Pipeline", "CI workflow for React/Vue projects with component testing."),
            ]),
        ],
    );

    let deployment = section(
        "deployment",
        "Deployment",
        vec![
            heading("Deployment Workflow Examples"),
            paragraph(
                "Automate your application deployments to various environments with these GitHub Actions workflow examples.",
            ),
            heading("AWS S3 Deployment"),
            snippet(AWS_DEPLOY, "yaml", Some("aws-deploy.yml")),
            heading("Best Practices"),
            checklist(&[
                "Use environment protection rules for production deployments",
                "Store sensitive credentials in GitHub Secrets",
                "Implement staged deployments (dev → staging → production)",
                "Add post-deployment checks to verify successful deployments",
            ]),
            heading("More Deployment Examples"),
            cards(&[
                ("Netlify Deployment", "Deploy static sites to Netlify automatically."),
                ("Kubernetes Deployment", "Deploy containers to Kubernetes clusters."),
                ("Heroku Deployment", "Deploy applications to Heroku with review apps."),
                ("Firebase Deployment", "Deploy web apps and functions to Firebase."),
            ]),
        ],
    );

    let pr = section(
        "pr-automation",
        "PR Automation",
        vec![
            heading("Pull Request Automation"),
            paragraph(
                "Streamline your pull request workflow with these automation examples that handle labeling, reviewing, and quality checks.",
            ),
            heading("PR Automation Workflow"),
            snippet(PR_AUTOMATION, "yaml", Some("pr-automation.yml")),
            heading("Labeler Configuration"),
            snippet(LABELER_CONFIG, "yaml", Some(".github/labeler.yml")),
            heading("PR Automation Benefits"),
            cards(&[
                ("Reduced Manual Work", "Automate repetitive tasks like labeling, assigning, and initial reviews."),
                ("Consistent Process", "Ensure all PRs follow the same workflow and meet quality standards."),
                ("Faster Reviews", "Route PRs to the right reviewers based on content changes."),
                ("Better Organization", "Categorize PRs with labels for better tracking and filtering."),
            ]),
            heading("Additional PR Automation Examples"),
            cards(&[
                ("Stale PR Handling", "Automatically flag and manage inactive pull requests."),
                ("PR Quality Gates", "Enforce quality standards like test coverage and lint rules."),
                ("Auto-Generated Screenshots", "Generate and attach UI screenshots to frontend PRs."),
                ("Comment Templates", "Add structured comment templates to new PRs."),
            ]),
        ],
    );

    let releases = section(
        "releases",
        "Release Management",
        vec![
            heading("Release Management"),
            paragraph(
                "Automate your release process with these workflows that handle versioning, changelogs, and publishing.",
            ),
            heading("Automated Release Workflow"),
            snippet(RELEASE, "yaml", Some("release-management.yml")),
            heading("Release Workflow Features"),
            checklist(&[
                "Automated version increments based on commit messages",
                "Generated changelogs from commit history",
                "GitHub Releases creation with proper tagging",
                "Asset bundling for release attachments",
            ]),
            heading("Additional Release Examples"),
            cards(&[
                ("Semantic Versioning", "Automate semantic versioning based on commit types."),
                ("NPM Package Publishing", "Publish packages to npm registry on release."),
                ("Docker Image Publishing", "Build and publish Docker images with release tags."),
                ("Release Announcements", "Publish release notes to Slack, Twitter, or other platforms."),
            ]),
        ],
    );

    let monorepo = section(
        "monorepo",
        "Monorepo Workflows",
        vec![
            heading("Monorepo Workflows"),
            paragraph(
                "Optimize CI/CD for monorepo projects with these specialized workflows that handle package-specific changes and dependencies.",
            ),
            heading("Monorepo CI Workflow"),
            snippet(MONOREPO, "yaml", Some("monorepo-ci.yml")),
            heading("Monorepo Configuration"),
            snippet(MONOREPO_CONFIG, "yaml", Some(".github/monorepo.yml")),
            heading("Monorepo Workflow Benefits"),
            checklist(&[
                "Only build and test packages affected by a change",
                "Respect dependencies between packages",
                "Run package builds in parallel with a matrix",
                "Keep CI time flat as the repository grows",
            ]),
        ],
    );

    TabbedPage {
        page: Page::Examples,
        title: "Advanced Workflow Examples".to_string(),
        subtitle: "Explore real-world examples of GitHub Actions workflows for various use cases".to_string(),
        tabs: vec![ci, deployment, pr, releases, monorepo],
        default_tab: "ci-pipelines".to_string(),
    }
}

#[cfg(test)]
mod examples_tests {
    use super::*;

    #[test]
    fn test_example_categories() {
        let page = examples_page();
        assert_eq!(
            page.tab_ids(),
            vec!["ci-pipelines", "deployment", "pr-automation", "releases", "monorepo"]
        );
    }

    #[test]
    fn test_every_category_has_a_titled_snippet() {
        let page = examples_page();
        for tab in &page.tabs {
            let snippets = tab.snippets();
            assert!(!snippets.is_empty(), "{} has no snippet", tab.id);
            assert!(snippets[0].title.is_some());
            assert_eq!(snippets[0].language, "yaml");
        }
    }
}
