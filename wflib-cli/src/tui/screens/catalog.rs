//! Workflow template and custom action pages

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use wflib_core::catalog::{option_label, CatalogView, EntryRef, Listing};
use wflib_core::content::Page;
use wflib_core::render::{self, Card};

use super::styled_lines;
use crate::tui::state::{BrowserState, CatalogPane, Focus};
use crate::tui::theme::Theme;

/// Render whichever catalog page is current
pub fn render(frame: &mut Frame, area: Rect, state: &BrowserState<'_>, theme: &Theme) {
    let searching = state.focus == Focus::Search;
    match state.page {
        Page::CustomActions => {
            let view = state.action_view();
            render_catalog(frame, area, &state.actions, &view, searching, theme);
        }
        _ => {
            let view = state.workflow_view();
            render_catalog(frame, area, &state.workflows, &view, searching, theme);
        }
    }

    if let Some(entry) = state.selected_entry() {
        let pane = match entry {
            EntryRef::Workflow(_) => &state.workflows,
            EntryRef::Action(_) => &state.actions,
        };
        if pane.detail_open {
            render_detail(frame, area, entry, pane.detail_scroll, theme);
        }
    }
}

fn render_catalog<T: Card>(
    frame: &mut Frame,
    area: Rect,
    pane: &CatalogPane,
    view: &CatalogView<'_, T>,
    searching: bool,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(pane.kind.title(), theme.title)),
        Line::from(Span::styled(pane.kind.subtitle(), theme.muted)),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let mut options = vec![Span::raw(format!("{} ", pane.kind.selector_label()))];
    for option in pane.kind.options() {
        let label = format!(" {} ", option_label(option));
        if *option == pane.filter.category {
            options.push(Span::styled(label, theme.selected));
        } else {
            options.push(Span::raw(label));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(options)), chunks[1]);

    render_search(frame, chunks[2], pane, searching, theme);

    match view.listing() {
        Listing::Cards(entries) => {
            let items: Vec<ListItem> = entries
                .iter()
                .map(|entry| {
                    let mut lines = styled_card(entry.card_lines(), theme);
                    lines.push(Line::from(""));
                    ListItem::new(lines)
                })
                .collect();

            let list = List::new(items)
                .block(Block::default().borders(Borders::TOP))
                .highlight_style(theme.selected);
            let mut list_state = ListState::default().with_selected(Some(pane.selected));
            frame.render_stateful_widget(list, chunks[3], &mut list_state);
        }
        Listing::Empty(empty) => {
            let lines = vec![
                Line::from(""),
                Line::from(empty.message),
                Line::from(Span::styled(
                    format!("[{}] press x", empty.reset_label),
                    theme.highlight,
                )),
            ];
            let block = Block::default().borders(Borders::TOP);
            frame.render_widget(Paragraph::new(lines).block(block), chunks[3]);
        }
    }
}

fn render_search(frame: &mut Frame, area: Rect, pane: &CatalogPane, searching: bool, theme: &Theme) {
    let (text, style) = if pane.search.value().is_empty() && !searching {
        (pane.kind.search_placeholder().to_string(), theme.muted)
    } else {
        (pane.search.value().to_string(), Style::default())
    };

    let border = if searching { theme.focused } else { theme.muted };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Search ");

    // Keep the cursor visible when the query is wider than the box
    let width = area.width.saturating_sub(2) as usize;
    let scroll = pane.search.visual_scroll(width.saturating_sub(1));
    let input = Paragraph::new(Span::styled(text, style))
        .scroll((0, scroll as u16))
        .block(block);
    frame.render_widget(input, area);

    if searching {
        let cursor = pane.search.visual_cursor().saturating_sub(scroll);
        frame.set_cursor_position((area.x + 1 + cursor as u16, area.y + 1));
    }
}

/// First card line is the heading
fn styled_card(lines: Vec<String>, theme: &Theme) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                Line::from(Span::styled(line, theme.highlight))
            } else {
                Line::from(line)
            }
        })
        .collect()
}

fn render_detail(frame: &mut Frame, area: Rect, entry: EntryRef<'_>, scroll: u16, theme: &Theme) {
    let popup = centered(area, 90, 90);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.focused)
        .title(" Details · c copy · Esc close ");
    let text = styled_lines(render::entry_detail(entry), theme);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        popup,
    );
}

/// A rectangle `percent_x` by `percent_y` of `area`, centered
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
