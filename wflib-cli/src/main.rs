//! wflib - browse GitHub Actions workflow templates and custom actions
//!
//! Every page of the library is a subcommand; `browse` opens the
//! interactive terminal browser when built with the `tui` feature.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wflib_core::catalog::Catalog;
use wflib_core::config::{LibraryConfig, OutputFormat, CATALOG_ENV};

mod catalog_cli;
mod clipboard;
mod content_cli;
#[cfg(feature = "tui")]
mod tui;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "wflib",
    about = "Browse a library of GitHub Actions workflow templates and custom actions",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Catalog file to browse instead of the built-in one (also WFLIB_CATALOG)
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,

    /// Override the config file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Command {
    /// List workflow templates
    Workflows(catalog_cli::WorkflowArgs),

    /// List custom actions
    Actions(catalog_cli::ActionArgs),

    /// Show one workflow template or custom action
    Show {
        /// Entry id (e.g. node-ci, auto-label)
        id: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,

        /// Copy the entry's content to the system clipboard
        #[clap(long)]
        copy: bool,
    },

    /// Summary of the library
    Dashboard {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Documentation pages
    Docs(content_cli::DocsArgs),

    /// Advanced workflow examples
    Examples(content_cli::ExamplesArgs),

    /// Developer tools pages
    Tools(content_cli::ToolsArgs),

    /// List pages and their routes
    Pages,

    /// Interactive browser
    #[cfg(feature = "tui")]
    Browse,
}

/// Initialize tracing with the --log-level flag.
///
/// RUST_LOG directives, when set, are added on top.
fn initialize_tracing(log_level: &LogLevel) {
    let mut filter = EnvFilter::new(log_level.to_filter_directive());

    if let Ok(extra) = std::env::var("RUST_LOG") {
        for directive in extra.split(',').filter(|d| !d.trim().is_empty()) {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }
    }

    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Config and catalog shared by every command
pub struct AppContext {
    pub config: LibraryConfig,
    pub catalog: Catalog,
}

impl AppContext {
    fn load(config_path: Option<PathBuf>, catalog_flag: Option<PathBuf>) -> Result<Self> {
        let config = LibraryConfig::discover(config_path.as_deref())
            .context("Failed to load configuration")?;

        let env_catalog = std::env::var_os(CATALOG_ENV).map(PathBuf::from);
        let source = config.catalog_source(catalog_flag.as_deref(), env_catalog.as_deref());
        debug!(?source, "Resolved catalog source");

        let catalog = Catalog::load_or_builtin(source.as_deref()).with_context(|| match &source {
            Some(path) => format!("Failed to load catalog from {}", path.display()),
            None => "Failed to load built-in catalog".to_string(),
        })?;

        Ok(Self { config, catalog })
    }

    /// JSON when asked for on the command line or by config
    pub fn wants_json(&self, json_flag: bool) -> bool {
        json_flag || self.config.default_output == OutputFormat::Json
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let ctx = AppContext::load(cli.config, cli.catalog)?;

    match cli.command {
        Command::Workflows(args) => catalog_cli::execute_workflows(&ctx, args),
        Command::Actions(args) => catalog_cli::execute_actions(&ctx, args),
        Command::Show { id, json, copy } => catalog_cli::execute_show(&ctx, &id, json, copy),
        Command::Dashboard { json } => content_cli::execute_dashboard(&ctx, json),
        Command::Docs(args) => content_cli::execute_docs(&ctx, args),
        Command::Examples(args) => content_cli::execute_examples(&ctx, args),
        Command::Tools(args) => content_cli::execute_tools(&ctx, args),
        Command::Pages => content_cli::execute_pages(),
        #[cfg(feature = "tui")]
        Command::Browse => tui::run(&ctx),
    }
}
