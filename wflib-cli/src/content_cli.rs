//! Static page commands: dashboard, docs, examples, developer tools, pages

use anyhow::Result;
use clap::Args;
use tracing::warn;

use wflib_core::content::{
    current_footer_notice, developer_tools_page, documentation_page, examples_page, Dashboard,
    ExpandState, TabbedPage, DEFAULT_EXPANDED,
};
use wflib_core::render;

use crate::AppContext;

#[derive(Args, Debug)]
pub struct DocsArgs {
    /// Tab to show (getting-started, workflows, actions, cli)
    #[clap(long)]
    pub tab: Option<String>,

    /// Open an accordion section (repeatable)
    #[clap(long, value_name = "ID")]
    pub expand: Vec<String>,

    /// Close an accordion section (repeatable)
    #[clap(long, value_name = "ID")]
    pub collapse: Vec<String>,

    /// Output the tab as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ExamplesArgs {
    /// Example category (ci-pipelines, deployment, pr-automation, releases, monorepo)
    #[clap(long)]
    pub category: Option<String>,

    /// Output the category as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Tab to show (cli, vscode, testing, config)
    #[clap(long)]
    pub tab: Option<String>,

    /// Output the tab as JSON
    #[clap(long)]
    pub json: bool,
}

pub fn execute_dashboard(ctx: &AppContext, json: bool) -> Result<()> {
    let dashboard = Dashboard::from_catalog(&ctx.catalog);

    if ctx.wants_json(json) {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    print_lines(render::dashboard(&dashboard));
    println!();
    print_lines(render::footer(&current_footer_notice()));
    Ok(())
}

pub fn execute_docs(ctx: &AppContext, args: DocsArgs) -> Result<()> {
    let page = documentation_page();

    let mut expand = ExpandState::with_expanded(DEFAULT_EXPANDED);
    for id in &args.expand {
        expand.set(id, true);
    }
    for id in &args.collapse {
        expand.set(id, false);
    }

    let known: Vec<&str> = page.tabs.iter().flat_map(|t| t.accordion_ids()).collect();
    for id in args.expand.iter().chain(&args.collapse) {
        if !known.contains(&id.as_str()) {
            warn!("Unknown section '{id}'. Available: {}", known.join(", "));
        }
    }

    show_tab(ctx, &page, args.tab.as_deref(), &expand, args.json)
}

pub fn execute_examples(ctx: &AppContext, args: ExamplesArgs) -> Result<()> {
    show_tab(
        ctx,
        &examples_page(),
        args.category.as_deref(),
        &ExpandState::default(),
        args.json,
    )
}

pub fn execute_tools(ctx: &AppContext, args: ToolsArgs) -> Result<()> {
    show_tab(
        ctx,
        &developer_tools_page(),
        args.tab.as_deref(),
        &ExpandState::default(),
        args.json,
    )
}

fn show_tab(
    ctx: &AppContext,
    page: &TabbedPage,
    tab: Option<&str>,
    expand: &ExpandState,
    json: bool,
) -> Result<()> {
    let section = match tab {
        Some(id) => page.tab(id)?,
        None => page.default_section()?,
    };

    if ctx.wants_json(json) {
        println!("{}", serde_json::to_string_pretty(section)?);
    } else {
        print_lines(render::tabbed_page(page, section, expand));
    }
    Ok(())
}

pub fn execute_pages() -> Result<()> {
    println!("Pages:\n");
    print_lines(render::navigation(None));
    println!();
    print_lines(render::footer(&current_footer_notice()));
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
