//! Static page content, expressed as data
//!
//! Documentation, developer tools and examples pages are tables of
//! [`ContentBlock`]s grouped into tabs. One renderer (see [`crate::render`])
//! turns any of them into text; no page has hand-written layout.

mod dashboard;
mod documentation;
mod examples;
mod tools;

pub use dashboard::{popular_workflows, Activity, Dashboard, Stat, POPULAR_COUNT, RECENT_ACTIVITY};
pub use documentation::{documentation_page, DEFAULT_EXPANDED};
pub use examples::examples_page;
pub use tools::{custom_action_usage, developer_tools_page, CUSTOM_ACTION_USAGE};

use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{LibraryError, Result};
use crate::snippet::CodeSnippet;

/// Application title, shown in the header and footer
pub const APP_TITLE: &str = "GitHub Actions Workflow Library";

/// Top-level pages and their routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    Dashboard,
    WorkflowTemplates,
    CustomActions,
    Documentation,
    DeveloperTools,
    Examples,
}

impl Page {
    /// Navigation order
    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::WorkflowTemplates,
            Page::CustomActions,
            Page::Documentation,
            Page::DeveloperTools,
            Page::Examples,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::WorkflowTemplates => "/workflows",
            Page::CustomActions => "/custom-actions",
            Page::Documentation => "/documentation",
            Page::DeveloperTools => "/developer-tools",
            Page::Examples => "/examples",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::WorkflowTemplates => "Workflow Templates",
            Page::CustomActions => "Custom Actions",
            Page::Documentation => "Documentation",
            Page::DeveloperTools => "Developer Tools",
            Page::Examples => "Examples",
        }
    }

    /// Resolve a route path; unknown routes resolve to `None`
    pub fn from_path(path: &str) -> Option<Page> {
        Page::all().iter().copied().find(|p| p.path() == path)
    }
}

/// Footer line, e.g. `© 2026 - MIT License`
pub fn footer_notice(year: i32) -> String {
    format!("© {year} - MIT License")
}

/// Footer line for the current year
pub fn current_footer_notice() -> String {
    footer_notice(chrono::Local::now().year())
}

/// A titled short description, rendered as a small card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoCard {
    pub title: String,
    pub body: String,
}

/// A collapsible block; its open/closed flag lives in [`ExpandState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accordion {
    pub id: String,
    pub title: String,
    pub blocks: Vec<ContentBlock>,
}

/// One unit of static page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading(String),
    Paragraph(String),
    Bullets(Vec<String>),
    /// Numbered instructions
    Steps(Vec<String>),
    /// Ticked list of points
    Checklist(Vec<String>),
    Cards(Vec<InfoCard>),
    Snippet(CodeSnippet),
    Accordion(Accordion),
}

/// A tab (or example category) of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub blocks: Vec<ContentBlock>,
}

impl Section {
    /// Accordion ids declared directly in this section
    pub fn accordion_ids(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Accordion(a) => Some(a.id.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every snippet in this section, including inside accordions
    pub fn snippets(&self) -> Vec<&CodeSnippet> {
        fn collect<'a>(blocks: &'a [ContentBlock], out: &mut Vec<&'a CodeSnippet>) {
            for block in blocks {
                match block {
                    ContentBlock::Snippet(s) => out.push(s),
                    ContentBlock::Accordion(a) => collect(&a.blocks, out),
                    _ => {}
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.blocks, &mut out);
        out
    }
}

/// A page made of selectable tabs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabbedPage {
    pub page: Page,
    pub title: String,
    pub subtitle: String,
    pub tabs: Vec<Section>,
    pub default_tab: String,
}

impl TabbedPage {
    pub fn tab_ids(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.id.as_str()).collect()
    }

    /// Look up a tab by id
    pub fn tab(&self, id: &str) -> Result<&Section> {
        self.tabs
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| LibraryError::UnknownTab {
                page: self.page.title().to_string(),
                tab: id.to_string(),
                available: self.tab_ids().join(", "),
            })
    }

    /// The tab shown when nothing is selected
    pub fn default_section(&self) -> Result<&Section> {
        self.tab(&self.default_tab)
    }
}

/// Which accordions are open. Ephemeral: never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    flags: BTreeMap<String, bool>,
}

impl ExpandState {
    /// Start with the given ids open and everything else closed
    pub fn with_expanded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            flags: ids.into_iter().map(|id| (id.into(), true)).collect(),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    /// Flip one section; others are untouched
    pub fn toggle(&mut self, id: &str) {
        let flag = self.flags.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
    }

    pub fn set(&mut self, id: &str, expanded: bool) {
        self.flags.insert(id.to_string(), expanded);
    }
}

pub(crate) fn heading(text: &str) -> ContentBlock {
    ContentBlock::Heading(text.to_string())
}

pub(crate) fn paragraph(text: &str) -> ContentBlock {
    ContentBlock::Paragraph(text.to_string())
}

pub(crate) fn bullets(items: &[&str]) -> ContentBlock {
    ContentBlock::Bullets(to_strings(items))
}

pub(crate) fn steps(items: &[&str]) -> ContentBlock {
    ContentBlock::Steps(to_strings(items))
}

pub(crate) fn checklist(items: &[&str]) -> ContentBlock {
    ContentBlock::Checklist(to_strings(items))
}

pub(crate) fn cards(items: &[(&str, &str)]) -> ContentBlock {
    ContentBlock::Cards(
        items
            .iter()
            .map(|(title, body)| InfoCard {
                title: title.to_string(),
                body: body.to_string(),
            })
            .collect(),
    )
}

pub(crate) fn snippet(code: &str, language: &str, title: Option<&str>) -> ContentBlock {
    let s = CodeSnippet::new(code, language);
    ContentBlock::Snippet(match title {
        Some(t) => s.titled(t),
        None => s,
    })
}

pub(crate) fn accordion(id: &str, title: &str, blocks: Vec<ContentBlock>) -> ContentBlock {
    ContentBlock::Accordion(Accordion {
        id: id.to_string(),
        title: title.to_string(),
        blocks,
    })
}

pub(crate) fn section(id: &str, title: &str, blocks: Vec<ContentBlock>) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        blocks,
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod content_tests {
    use super::*;

    #[test]
    fn test_routes_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_path(page.path()), Some(*page));
        }
        assert_eq!(Page::from_path("/nope"), None);
        assert_eq!(Page::from_path("/workflows"), Some(Page::WorkflowTemplates));
    }

    #[test]
    fn test_expand_state_toggles_independently() {
        let mut state = ExpandState::with_expanded(["intro"]);
        assert!(state.is_expanded("intro"));
        assert!(!state.is_expanded("setup"));

        state.toggle("setup");
        assert!(state.is_expanded("setup"));
        assert!(state.is_expanded("intro"));

        state.toggle("intro");
        assert!(!state.is_expanded("intro"));
        assert!(state.is_expanded("setup"));

        state.set("setup", false);
        assert!(!state.is_expanded("setup"));
    }

    #[test]
    fn test_unknown_tab_lists_available_tabs() {
        let page = documentation_page();
        let err = page.tab("nope").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("getting-started"));
        assert!(message.contains("cli"));
    }

    #[test]
    fn test_footer_notice() {
        assert_eq!(footer_notice(2026), "© 2026 - MIT License");
    }

    #[test]
    fn test_every_default_tab_exists() {
        for page in [documentation_page(), developer_tools_page(), examples_page()] {
            assert!(page.default_section().is_ok(), "{:?}", page.page);
        }
    }
}
