//! Catalog commands: list, filter and show workflow templates and actions

use anyhow::{bail, Context, Result};
use clap::Args;
use std::time::Instant;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use wflib_core::catalog::{
    ActionEntry, CatalogItem, CatalogKind, CatalogView, EntryRef, FilterState, Listing,
    WorkflowEntry, ALL_CATEGORIES,
};
use wflib_core::render::{self, Card};
use wflib_core::snippet::CopyIndicator;

use crate::clipboard::SystemClipboard;
use crate::AppContext;

const DESCRIPTION_WIDTH: usize = 50;

#[derive(Args, Debug)]
pub struct WorkflowArgs {
    /// Search query (matches name, description and tags)
    pub query: Option<String>,

    /// Filter by language (JavaScript, Python, Go, Rust, ...)
    #[clap(long, short, default_value = ALL_CATEGORIES)]
    pub language: String,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ActionArgs {
    /// Search query (matches name, description and tags)
    pub query: Option<String>,

    /// Filter by category (PR Automation, Issue Management, ...)
    #[clap(long, short, default_value = ALL_CATEGORIES)]
    pub category: String,

    /// Show how to use a custom action in a workflow first
    #[clap(long)]
    pub usage: bool,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output results as JSON
    #[clap(long, conflicts_with = "cards")]
    pub json: bool,

    /// Show full summary cards instead of a table
    #[clap(long)]
    pub cards: bool,
}

/// Table row for workflow templates
#[derive(Tabled)]
struct WorkflowRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Stars")]
    stars: u64,
    #[tabled(rename = "Forks")]
    forks: u64,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&WorkflowEntry> for WorkflowRow {
    fn from(w: &WorkflowEntry) -> Self {
        Self {
            id: w.id.clone(),
            name: w.name.clone(),
            language: w.language.clone(),
            stars: w.star_count,
            forks: w.fork_count,
            tags: w.tags_display(),
            description: truncate(w.short_description(), DESCRIPTION_WIDTH),
        }
    }
}

/// Table row for custom actions
#[derive(Tabled)]
struct ActionRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Stars")]
    stars: u64,
    #[tabled(rename = "Downloads")]
    downloads: u64,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&ActionEntry> for ActionRow {
    fn from(a: &ActionEntry) -> Self {
        Self {
            id: a.id.clone(),
            name: a.name.clone(),
            stars: a.star_count,
            downloads: a.download_count,
            tags: a.tags_display(),
            description: truncate(a.short_description(), DESCRIPTION_WIDTH),
        }
    }
}

/// Cut `text` to `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

pub fn execute_workflows(ctx: &AppContext, args: WorkflowArgs) -> Result<()> {
    let filter = FilterState::new(args.language, args.query.unwrap_or_default());
    let view = CatalogView::new(CatalogKind::Workflows, &ctx.catalog.workflows).with_filter(filter);
    print_view::<_, WorkflowRow>(ctx, &view, &args.output)
}

pub fn execute_actions(ctx: &AppContext, args: ActionArgs) -> Result<()> {
    if args.usage && !ctx.wants_json(args.output.json) {
        for line in render::action_usage() {
            println!("{line}");
        }
        println!();
    }

    let filter = FilterState::new(args.category, args.query.unwrap_or_default());
    let view = CatalogView::new(CatalogKind::Actions, &ctx.catalog.actions).with_filter(filter);
    print_view::<_, ActionRow>(ctx, &view, &args.output)
}

fn print_view<'a, T, R>(ctx: &AppContext, view: &CatalogView<'a, T>, output: &OutputArgs) -> Result<()>
where
    T: Card + serde::Serialize,
    R: Tabled + From<&'a T>,
{
    if ctx.wants_json(output.json) {
        println!("{}", serde_json::to_string_pretty(&view.results())?);
        return Ok(());
    }

    if output.cards {
        for line in render::catalog_page(view) {
            println!("{line}");
        }
        return Ok(());
    }

    match view.listing() {
        Listing::Empty(state) => {
            println!("{}", state.message);
            println!(
                "\n{}: run `wflib {}` without a query or filter.",
                state.reset_label,
                command_name(view.kind())
            );
        }
        Listing::Cards(entries) => {
            println!("Found {} {}(s):\n", entries.len(), T::KIND);

            let rows: Vec<R> = entries.into_iter().map(R::from).collect();
            let table = Table::new(&rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()))
                .to_string();

            println!("{table}");
        }
    }

    Ok(())
}

fn command_name(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::Workflows => "workflows",
        CatalogKind::Actions => "actions",
    }
}

pub fn execute_show(ctx: &AppContext, id: &str, json: bool, copy: bool) -> Result<()> {
    let entry = ctx.catalog.require(id)?;

    if ctx.wants_json(json) {
        let output = match entry {
            EntryRef::Workflow(w) => serde_json::to_string_pretty(w)?,
            EntryRef::Action(a) => serde_json::to_string_pretty(a)?,
        };
        println!("{output}");
    } else {
        for line in render::entry_detail(entry) {
            println!("{line}");
        }
    }

    if copy {
        copy_entry(entry)?;
    }

    Ok(())
}

fn copy_entry(entry: EntryRef<'_>) -> Result<()> {
    let (id, snippet) = match entry {
        EntryRef::Workflow(w) => (w.id(), render::entry_snippet(&w.content, &w.source_path)),
        EntryRef::Action(a) => (a.id(), render::entry_snippet(&a.content, &a.source_path)),
    };

    let Some(snippet) = snippet else {
        bail!("'{id}' has no content to copy");
    };

    let mut clipboard = SystemClipboard::new().context("System clipboard unavailable")?;
    let mut indicator = CopyIndicator::default();
    let now = Instant::now();

    snippet
        .copy_with(&mut clipboard, &mut indicator, now)
        .context("Failed to copy to clipboard")?;

    if indicator.is_copied(now) {
        eprintln!("✓ Copied {} to clipboard", snippet.title.as_deref().unwrap_or(id));
    }

    Ok(())
}
