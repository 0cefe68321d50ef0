//! Interactive terminal browser
//!
//! A single-page-app style view of the library: a navigation bar across
//! the six pages, catalog pages with live search and category selection,
//! tabbed content pages with accordions and copyable snippets.

mod app;
mod screens;
mod state;
mod theme;

use anyhow::Result;
use tracing::info;

use crate::AppContext;

pub fn run(ctx: &AppContext) -> Result<()> {
    info!(
        workflows = ctx.catalog.workflows.len(),
        actions = ctx.catalog.actions.len(),
        "Starting interactive browser"
    );
    app::App::new(&ctx.catalog, ctx.config.color).run()
}
