//! Plain-text rendering
//!
//! Every page, card and content block turns into lines of text here, so the
//! CLI and the interactive browser show the same thing. Renderers build
//! `Vec<String>` line lists; callers join or draw them.

use crate::catalog::{
    option_label, ActionEntry, CatalogItem, CatalogView, EmptyState, EntryRef, Listing,
    WorkflowEntry,
};
use crate::content::{
    custom_action_usage, ContentBlock, Dashboard, ExpandState, Page, Section, TabbedPage,
    APP_TITLE,
};
use crate::snippet::CodeSnippet;

const INDENT: &str = "  ";

/// An entry that can be drawn as a summary card
pub trait Card: CatalogItem {
    fn card_lines(&self) -> Vec<String>;
}

impl Card for WorkflowEntry {
    fn card_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("● {}", self.language),
            self.name.clone(),
            format!("{INDENT}{}", self.description),
        ];
        if !self.tags.is_empty() {
            lines.push(format!("{INDENT}{}", tag_chips(&self.tags)));
        }
        lines.push(format!(
            "{INDENT}★ {}  ⑂ {}  [View Details →]",
            self.star_count, self.fork_count
        ));
        lines
    }
}

impl Card for ActionEntry {
    fn card_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} {}", self.icon.glyph.symbol(), self.name),
            format!("{INDENT}{}", self.description),
        ];
        if !self.tags.is_empty() {
            lines.push(format!("{INDENT}{}", tag_chips(&self.tags)));
        }
        lines.push(format!(
            "{INDENT}★ {}  ↓ {}  [View Action →]",
            self.star_count, self.download_count
        ));
        lines
    }
}

fn tag_chips(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{t}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Header, filter controls and listing of a catalog page
pub fn catalog_page<T: Card>(view: &CatalogView<'_, T>) -> Vec<String> {
    let kind = view.kind();
    let filter = view.filter();

    let options = kind
        .options()
        .iter()
        .map(|option| {
            let label = option_label(option);
            if *option == filter.category {
                format!("({label})")
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let search = if filter.query.is_empty() {
        kind.search_placeholder().to_string()
    } else {
        filter.query.clone()
    };

    let mut lines = vec![
        kind.title().to_string(),
        kind.subtitle().to_string(),
        String::new(),
        format!("{} {options}", kind.selector_label()),
        format!("Search: {search}"),
        String::new(),
    ];
    lines.extend(listing(&view.listing()));
    lines
}

/// Cards in order, or the empty state
pub fn listing<T: Card>(listing: &Listing<'_, T>) -> Vec<String> {
    match listing {
        Listing::Cards(entries) => {
            let mut lines = Vec::new();
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                lines.extend(entry.card_lines());
            }
            lines
        }
        Listing::Empty(state) => empty_state(state),
    }
}

pub fn empty_state(state: &EmptyState) -> Vec<String> {
    vec![state.message.to_string(), format!("[{}]", state.reset_label)]
}

/// Full detail of one entry, content included
pub fn entry_detail(entry: EntryRef<'_>) -> Vec<String> {
    let (mut lines, snippet) = match entry {
        EntryRef::Workflow(w) => (
            vec![
                format!("Workflow: {}", w.name),
                format!("Id:       {}", w.id),
                format!("Language: {}", w.language),
                format!("Stars:    {}", w.star_count),
                format!("Forks:    {}", w.fork_count),
                format!("Tags:     {}", w.tags_display()),
                format!("Source:   {}", w.source_path),
                String::new(),
                "Description:".to_string(),
                format!("{INDENT}{}", w.description),
            ],
            entry_snippet(&w.content, &w.source_path),
        ),
        EntryRef::Action(a) => (
            vec![
                format!("Action:    {} {}", a.icon.glyph.symbol(), a.name),
                format!("Id:        {}", a.id),
                format!("Stars:     {}", a.star_count),
                format!("Downloads: {}", a.download_count),
                format!("Tags:      {}", a.tags_display()),
                format!("Source:    {}", a.source_path),
                String::new(),
                "Description:".to_string(),
                format!("{INDENT}{}", a.description),
            ],
            entry_snippet(&a.content, &a.source_path),
        ),
    };

    lines.push(String::new());
    match snippet {
        Some(s) => lines.extend(snippet_lines(&s)),
        None => lines.push("No content bundled for this entry.".to_string()),
    }
    lines
}

/// The copyable body of an entry, if it has one
pub fn entry_snippet(content: &str, source_path: &str) -> Option<CodeSnippet> {
    if content.trim().is_empty() {
        None
    } else {
        Some(CodeSnippet::new(content, "yaml").titled(source_path))
    }
}

/// A snippet, verbatim, inside a fence
pub fn snippet_lines(snippet: &CodeSnippet) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(title) = &snippet.title {
        lines.push(format!("{title} ({})", snippet.language));
    }
    lines.push(format!("```{}", snippet.language));
    lines.extend(snippet.code.lines().map(str::to_string));
    lines.push("```".to_string());
    lines
}

/// The "How to Use Custom Actions" box
pub fn action_usage() -> Vec<String> {
    let mut lines = vec![
        "How to Use Custom Actions".to_string(),
        "Custom actions can be easily incorporated into your workflows by referencing them in your workflow file.".to_string(),
        String::new(),
    ];
    lines.extend(snippet_lines(&custom_action_usage()));
    lines
}

/// Content blocks; closed accordions show only their title
pub fn content_blocks(blocks: &[ContentBlock], expand: &ExpandState) -> Vec<String> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            ContentBlock::Heading(text) => {
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(format!("## {text}"));
            }
            ContentBlock::Paragraph(text) => lines.push(text.clone()),
            ContentBlock::Bullets(items) => {
                lines.extend(items.iter().map(|i| format!("{INDENT}• {i}")));
            }
            ContentBlock::Steps(items) => {
                lines.extend(
                    items
                        .iter()
                        .enumerate()
                        .map(|(n, i)| format!("{INDENT}{}. {i}", n + 1)),
                );
            }
            ContentBlock::Checklist(items) => {
                lines.extend(items.iter().map(|i| format!("{INDENT}✓ {i}")));
            }
            ContentBlock::Cards(cards) => {
                for card in cards {
                    lines.push(format!("{INDENT}▪ {}", card.title));
                    lines.push(format!("{INDENT}{INDENT}{}", card.body));
                }
            }
            ContentBlock::Snippet(snippet) => lines.extend(snippet_lines(snippet)),
            ContentBlock::Accordion(acc) => {
                if expand.is_expanded(&acc.id) {
                    lines.push(format!("▾ {}", acc.title));
                    lines.extend(
                        content_blocks(&acc.blocks, expand)
                            .into_iter()
                            .map(|l| if l.is_empty() { l } else { format!("{INDENT}{l}") }),
                    );
                } else {
                    lines.push(format!("▸ {}", acc.title));
                }
            }
        }
    }
    lines
}

/// Page header, tab bar and the selected tab
pub fn tabbed_page(page: &TabbedPage, current: &Section, expand: &ExpandState) -> Vec<String> {
    let tab_bar = page
        .tabs
        .iter()
        .map(|t| {
            if t.id == current.id {
                format!("[{}]", t.title)
            } else {
                t.title.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let mut lines = vec![
        page.title.clone(),
        page.subtitle.clone(),
        String::new(),
        tab_bar,
        String::new(),
    ];
    lines.extend(content_blocks(&current.blocks, expand));
    lines
}

pub fn dashboard(dash: &Dashboard<'_>) -> Vec<String> {
    let mut lines = vec![dash.title.to_string(), dash.subtitle.to_string(), String::new()];

    for stat in &dash.stats {
        lines.push(format!("{:<22}{:>4}", stat.name, stat.value));
    }

    lines.push(String::new());
    lines.push(format!("## Popular Workflows   (View all: {})", Page::WorkflowTemplates.path()));
    for w in &dash.popular {
        lines.push(format!("{INDENT}{}  ★ {}", w.name, w.star_count));
        lines.push(format!("{INDENT}{INDENT}{}", w.short_description()));
    }

    lines.push(String::new());
    lines.push("## Recent Activity".to_string());
    for activity in dash.activity {
        lines.push(format!("{INDENT}{}", activity.action));
        lines.push(format!("{INDENT}{INDENT}{} · {}", activity.time, activity.user));
    }

    lines.push(String::new());
    lines.push(format!("## {}", dash.call_to_action.title));
    lines.push(dash.call_to_action.body.clone());
    lines
}

/// Navigation map, current page marked
pub fn navigation(current: Option<Page>) -> Vec<String> {
    Page::all()
        .iter()
        .map(|page| {
            let marker = if Some(*page) == current { "›" } else { " " };
            format!("{marker} {:<18}{}", page.path(), page.title())
        })
        .collect()
}

pub fn footer(notice: &str) -> Vec<String> {
    vec![APP_TITLE.to_string(), notice.to_string()]
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogKind};
    use crate::content::{documentation_page, DEFAULT_EXPANDED};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_workflow_card_lines() {
        let catalog = Catalog::builtin();
        let go = catalog.workflows.get("go-ci").unwrap();
        let lines = go.card_lines();

        assert_eq!(lines[0], "● Go");
        assert_eq!(lines[1], "Go Build & Test");
        assert!(lines.last().unwrap().contains("View Details"));
        assert!(lines.iter().any(|l| l.contains("[Go]")));
    }

    #[test]
    fn test_empty_listing_shows_message_and_reset() {
        let catalog = Catalog::builtin();
        let mut view = CatalogView::new(CatalogKind::Workflows, &catalog.workflows);
        view.set_query("no-such-thing");

        let lines = catalog_page(&view);
        assert!(lines.contains(&"No workflows match your filters.".to_string()));
        assert!(lines.contains(&"[Clear filters]".to_string()));
    }

    #[test]
    fn test_selector_marks_current_option() {
        let catalog = Catalog::builtin();
        let mut view = CatalogView::new(CatalogKind::Actions, &catalog.actions);
        view.set_category("Deployment");

        let lines = catalog_page(&view);
        assert_eq!(
            lines[3],
            "Filter by category: All PR Automation Issue Management (Deployment) Documentation"
        );
    }

    #[test]
    fn test_closed_accordion_shows_title_only() {
        let page = documentation_page();
        let tab = page.default_section().unwrap();
        let expand = ExpandState::with_expanded(DEFAULT_EXPANDED);

        let lines = content_blocks(&tab.blocks, &expand);
        assert!(lines.contains(&"▾ Introduction to GitHub Actions".to_string()));
        assert!(lines.contains(&"▸ Setting Up Your First Workflow".to_string()));
        assert!(!lines.iter().any(|l| l.contains("name: Basic CI")));
    }

    #[test]
    fn test_snippet_is_verbatim() {
        let snippet = CodeSnippet::new("a:\n  b: 1", "yaml").titled("x.yml");
        assert_eq!(
            snippet_lines(&snippet),
            vec!["x.yml (yaml)", "```yaml", "a:", "  b: 1", "```"]
        );
    }

    #[test]
    fn test_detail_without_content_has_note() {
        let catalog = Catalog::builtin();
        let lines = entry_detail(catalog.require("go-ci").unwrap());
        assert_eq!(lines.last().unwrap(), "No content bundled for this entry.");

        let lines = entry_detail(catalog.require("node-ci").unwrap());
        assert_eq!(lines.last().unwrap(), "```");
    }

    #[test]
    fn test_navigation_marks_current_page() {
        let lines = navigation(Some(Page::Examples));
        assert_eq!(lines.len(), 6);
        assert!(lines[5].starts_with("› /examples"));
        assert!(lines[0].starts_with("  /"));
    }
}
