//! Browser state and key handling
//!
//! Everything here is plain data driven by key events, so it can be tested
//! without a terminal.

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use wflib_core::catalog::{
    ActionEntry, Catalog, CatalogItem, CatalogKind, CatalogStore, CatalogView, EntryRef, FilterState,
    WorkflowEntry,
};
use wflib_core::content::{
    developer_tools_page, documentation_page, examples_page, ContentBlock, ExpandState, Page,
    Section, TabbedPage, DEFAULT_EXPANDED,
};
use wflib_core::render;
use wflib_core::snippet::{Clipboard, CodeSnippet, CopyIndicator};

/// Where key presses go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Browse,
    Search,
}

/// One catalog page: filter inputs plus selection
#[derive(Debug)]
pub struct CatalogPane {
    pub kind: CatalogKind,
    pub filter: FilterState,
    pub search: Input,
    pub selected: usize,
    pub detail_open: bool,
    pub detail_scroll: u16,
}

impl CatalogPane {
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            kind,
            filter: FilterState::default(),
            search: Input::default(),
            selected: 0,
            detail_open: false,
            detail_scroll: 0,
        }
    }

    /// Step through the fixed selector options, wrapping around
    pub fn cycle_category(&mut self, forward: bool) {
        let options = self.kind.options();
        let current = options
            .iter()
            .position(|o| *o == self.filter.category)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.filter.category = options[next].to_string();
        self.selected = 0;
    }

    /// Copy the search box into the filter
    pub fn sync_query(&mut self) {
        if self.filter.query != self.search.value() {
            self.filter.query = self.search.value().to_string();
            self.selected = 0;
        }
    }

    /// The "Clear filters" action
    pub fn clear_filters(&mut self) {
        self.filter.reset();
        self.search.reset();
        self.selected = 0;
    }

    pub fn view<'a, T: CatalogItem>(&self, store: &'a CatalogStore<T>) -> CatalogView<'a, T> {
        CatalogView::new(self.kind, store).with_filter(self.filter.clone())
    }
}

/// One tabbed content page
#[derive(Debug)]
pub struct ContentPane {
    pub page: TabbedPage,
    pub tab: usize,
    pub expand: ExpandState,
    pub scroll: u16,
    /// Index into the current tab's accordions
    pub accordion: usize,
    /// Index into the current tab's snippets
    pub snippet: usize,
}

impl ContentPane {
    pub fn new(page: TabbedPage, expanded: &[&str]) -> Self {
        let tab = page
            .tabs
            .iter()
            .position(|t| t.id == page.default_tab)
            .unwrap_or(0);
        Self {
            page,
            tab,
            expand: ExpandState::with_expanded(expanded.iter().copied()),
            scroll: 0,
            accordion: 0,
            snippet: 0,
        }
    }

    pub fn section(&self) -> Option<&Section> {
        self.page.tabs.get(self.tab)
    }

    pub fn switch_tab(&mut self, forward: bool) {
        let count = self.page.tabs.len();
        if count == 0 {
            return;
        }
        self.tab = if forward {
            (self.tab + 1) % count
        } else {
            (self.tab + count - 1) % count
        };
        self.scroll = 0;
        self.accordion = 0;
        self.snippet = 0;
    }

    /// Toggle the accordion under the cursor
    pub fn toggle_accordion(&mut self) {
        let id = self
            .section()
            .and_then(|s| s.accordion_ids().get(self.accordion).map(|id| id.to_string()));
        if let Some(id) = id {
            self.expand.toggle(&id);
        }
    }

    pub fn move_accordion(&mut self, forward: bool) {
        let count = self.section().map_or(0, |s| s.accordion_ids().len());
        self.accordion = step(self.accordion, count, forward);
    }

    /// Snippets currently on screen; closed accordions hide theirs
    pub fn visible_snippets(&self) -> Vec<&CodeSnippet> {
        fn collect<'a>(blocks: &'a [ContentBlock], expand: &ExpandState, out: &mut Vec<&'a CodeSnippet>) {
            for block in blocks {
                match block {
                    ContentBlock::Snippet(s) => out.push(s),
                    ContentBlock::Accordion(a) if expand.is_expanded(&a.id) => {
                        collect(&a.blocks, expand, out)
                    }
                    _ => {}
                }
            }
        }

        let mut out = Vec::new();
        if let Some(section) = self.section() {
            collect(&section.blocks, &self.expand, &mut out);
        }
        out
    }

    pub fn move_snippet(&mut self, forward: bool) {
        let count = self.visible_snippets().len();
        self.snippet = step(self.snippet, count, forward);
    }
}

/// Move a cursor within `0..count`, wrapping
fn step(current: usize, count: usize, forward: bool) -> usize {
    if count == 0 {
        0
    } else if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    }
}

/// Whole browser state
pub struct BrowserState<'a> {
    pub catalog: &'a Catalog,
    pub page: Page,
    pub focus: Focus,
    pub workflows: CatalogPane,
    pub actions: CatalogPane,
    pub docs: ContentPane,
    pub tools: ContentPane,
    pub examples: ContentPane,
    pub copy: CopyIndicator,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl<'a> BrowserState<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            page: Page::Dashboard,
            focus: Focus::Browse,
            workflows: CatalogPane::new(CatalogKind::Workflows),
            actions: CatalogPane::new(CatalogKind::Actions),
            docs: ContentPane::new(documentation_page(), &DEFAULT_EXPANDED),
            tools: ContentPane::new(developer_tools_page(), &[]),
            examples: ContentPane::new(examples_page(), &[]),
            copy: CopyIndicator::default(),
            status: None,
            should_quit: false,
        }
    }

    pub fn workflow_view(&self) -> CatalogView<'a, WorkflowEntry> {
        let catalog: &'a Catalog = self.catalog;
        self.workflows.view(&catalog.workflows)
    }

    pub fn action_view(&self) -> CatalogView<'a, ActionEntry> {
        let catalog: &'a Catalog = self.catalog;
        self.actions.view(&catalog.actions)
    }

    fn catalog_pane_mut(&mut self) -> Option<&mut CatalogPane> {
        match self.page {
            Page::WorkflowTemplates => Some(&mut self.workflows),
            Page::CustomActions => Some(&mut self.actions),
            _ => None,
        }
    }

    pub fn content_pane(&self) -> Option<&ContentPane> {
        match self.page {
            Page::Documentation => Some(&self.docs),
            Page::DeveloperTools => Some(&self.tools),
            Page::Examples => Some(&self.examples),
            _ => None,
        }
    }

    fn content_pane_mut(&mut self) -> Option<&mut ContentPane> {
        match self.page {
            Page::Documentation => Some(&mut self.docs),
            Page::DeveloperTools => Some(&mut self.tools),
            Page::Examples => Some(&mut self.examples),
            _ => None,
        }
    }

    /// The highlighted entry of the current catalog page
    pub fn selected_entry(&self) -> Option<EntryRef<'a>> {
        match self.page {
            Page::WorkflowTemplates => self
                .workflow_view()
                .results()
                .get(self.workflows.selected)
                .copied()
                .map(EntryRef::Workflow),
            Page::CustomActions => self
                .action_view()
                .results()
                .get(self.actions.selected)
                .copied()
                .map(EntryRef::Action),
            _ => None,
        }
    }

    fn result_count(&self) -> usize {
        match self.page {
            Page::WorkflowTemplates => self.workflow_view().results().len(),
            Page::CustomActions => self.action_view().results().len(),
            _ => 0,
        }
    }

    fn switch_page(&mut self, forward: bool) {
        let pages = Page::all();
        let current = pages.iter().position(|p| *p == self.page).unwrap_or(0);
        self.page = pages[step(current, pages.len(), forward)];
        self.focus = Focus::Browse;
    }

    /// Apply one key press
    pub fn handle_key<C: Clipboard>(&mut self, key: KeyEvent, clipboard: &mut C, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.focus == Focus::Search {
            self.handle_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.switch_page(true),
            KeyCode::BackTab => self.switch_page(false),
            KeyCode::Char(d @ '1'..='6') => {
                let index = d as usize - '1' as usize;
                if let Some(page) = Page::all().get(index) {
                    self.page = *page;
                }
            }
            KeyCode::Char('c') => self.copy_current(clipboard, now),
            _ => match self.page {
                Page::WorkflowTemplates | Page::CustomActions => self.handle_catalog_key(key),
                Page::Documentation | Page::DeveloperTools | Page::Examples => {
                    self.handle_content_key(key)
                }
                Page::Dashboard => {}
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let Some(pane) = self.catalog_pane_mut() else {
            self.focus = Focus::Browse;
            return;
        };

        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Down => self.focus = Focus::Browse,
            _ => {
                pane.search.handle_event(&Event::Key(key));
                pane.sync_query();
            }
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        let count = self.result_count();
        let Some(pane) = self.catalog_pane_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Left => pane.cycle_category(false),
            KeyCode::Right => pane.cycle_category(true),
            KeyCode::Up | KeyCode::Char('k') => {
                if pane.detail_open {
                    pane.detail_scroll = pane.detail_scroll.saturating_sub(1);
                } else {
                    pane.selected = pane.selected.saturating_sub(1);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if pane.detail_open {
                    pane.detail_scroll = pane.detail_scroll.saturating_add(1);
                } else if pane.selected + 1 < count {
                    pane.selected += 1;
                }
            }
            KeyCode::Enter if count > 0 => {
                pane.detail_open = !pane.detail_open;
                pane.detail_scroll = 0;
            }
            KeyCode::Esc if pane.detail_open => pane.detail_open = false,
            KeyCode::Esc | KeyCode::Char('x') => pane.clear_filters(),
            _ => {}
        }
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        let Some(pane) = self.content_pane_mut() else {
            return;
        };

        match key.code {
            KeyCode::Left => pane.switch_tab(false),
            KeyCode::Right => pane.switch_tab(true),
            KeyCode::Up | KeyCode::Char('k') => pane.scroll = pane.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => pane.scroll = pane.scroll.saturating_add(1),
            KeyCode::Char('n') => pane.move_accordion(true),
            KeyCode::Char('p') => pane.move_accordion(false),
            KeyCode::Enter | KeyCode::Char(' ') => pane.toggle_accordion(),
            KeyCode::Char(']') => pane.move_snippet(true),
            KeyCode::Char('[') => pane.move_snippet(false),
            _ => {}
        }
    }

    /// Copy the selected entry's content or the selected snippet
    fn copy_current<C: Clipboard>(&mut self, clipboard: &mut C, now: Instant) {
        let snippet = match self.page {
            Page::WorkflowTemplates | Page::CustomActions => {
                self.selected_entry().and_then(|entry| match entry {
                    EntryRef::Workflow(w) => render::entry_snippet(&w.content, &w.source_path),
                    EntryRef::Action(a) => render::entry_snippet(&a.content, &a.source_path),
                })
            }
            _ => self
                .content_pane()
                .and_then(|pane| pane.visible_snippets().get(pane.snippet).map(|s| (*s).clone())),
        };

        let Some(snippet) = snippet else {
            self.status = Some("Nothing to copy here".to_string());
            return;
        };

        self.status = match snippet.copy_with(clipboard, &mut self.copy, now) {
            Ok(()) => None,
            Err(e) => Some(e.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wflib_core::snippet::MemoryClipboard;

    fn press(state: &mut BrowserState<'_>, code: KeyCode) {
        let mut clipboard = MemoryClipboard::default();
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut clipboard, Instant::now());
    }

    fn type_text(state: &mut BrowserState<'_>, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_tab_cycles_pages() {
        let catalog = Catalog::builtin();
        let mut state = BrowserState::new(&catalog);

        press(&mut state, KeyCode::Tab);
        assert_eq!(state.page, Page::WorkflowTemplates);
        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.page, Page::Examples);
    }

    #[test]
    fn test_search_narrows_and_escape_clears() {
        let catalog = Catalog::builtin();
        let mut state = BrowserState::new(&catalog);
        state.page = Page::WorkflowTemplates;

        press(&mut state, KeyCode::Char('/'));
        assert_eq!(state.focus, Focus::Search);
        type_text(&mut state, "rust");
        assert_eq!(state.workflows.filter.query, "rust");
        assert_eq!(state.workflow_view().results().len(), 2);

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.focus, Focus::Browse);

        press(&mut state, KeyCode::Esc);
        assert!(state.workflows.filter.is_default());
        assert_eq!(state.workflows.search.value(), "");
    }

    #[test]
    fn test_category_cycles_through_fixed_options() {
        let catalog = Catalog::builtin();
        let mut state = BrowserState::new(&catalog);
        state.page = Page::CustomActions;

        press(&mut state, KeyCode::Right);
        assert_eq!(state.actions.filter.category, "PR Automation");
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.actions.filter.category, "Documentation");
    }

    #[test]
    fn test_copy_selected_entry() {
        let catalog = Catalog::builtin();
        let mut state = BrowserState::new(&catalog);
        state.page = Page::WorkflowTemplates;

        let mut clipboard = MemoryClipboard::default();
        let now = Instant::now();
        state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE), &mut clipboard, now);

        assert!(clipboard.last().is_some_and(|c| c.starts_with("name: Node.js CI")));
        assert!(state.copy.is_copied(now));

        // go-ci has no bundled content
        state.workflows.selected = 2;
        state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE), &mut clipboard, now);
        assert_eq!(state.status.as_deref(), Some("Nothing to copy here"));
    }

    #[test]
    fn test_failed_copy_reports_status() {
        let catalog = Catalog::builtin();
        let mut state = BrowserState::new(&catalog);
        state.page = Page::Examples;

        let mut clipboard = MemoryClipboard::failing();
        let now = Instant::now();
        state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE), &mut clipboard, now);

        assert!(!state.copy.is_copied(now));
        assert!(state.status.is_some());
    }

    #[test]
    fn test_accordion_toggle_reveals_snippet() {
        let catalog = Catalog::builtin();
        let mut state = BrowserState::new(&catalog);
        state.page = Page::Documentation;
        assert!(state.docs.visible_snippets().is_empty());

        press(&mut state, KeyCode::Char('n'));
        press(&mut state, KeyCode::Enter);
        assert!(state.docs.expand.is_expanded("setup"));
        assert_eq!(state.docs.visible_snippets().len(), 1);
    }
}
