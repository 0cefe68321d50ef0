//! Documentation, developer tools and examples pages

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use wflib_core::render;

use super::styled_lines;
use crate::tui::state::ContentPane;
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, pane: &ContentPane, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(pane.page.title.clone(), theme.title)),
        Line::from(Span::styled(pane.page.subtitle.clone(), theme.muted)),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let titles: Vec<Line> = pane.page.tabs.iter().map(|t| Line::from(t.title.clone())).collect();
    let tabs = Tabs::new(titles)
        .select(pane.tab)
        .highlight_style(theme.selected)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(tabs, chunks[1]);

    let Some(section) = pane.section() else {
        return;
    };

    let body = styled_lines(render::content_blocks(&section.blocks, &pane.expand), theme);
    frame.render_widget(
        Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .scroll((pane.scroll, 0)),
        chunks[2],
    );

    frame.render_widget(Paragraph::new(cursor_line(pane, theme)), chunks[3]);
}

/// Which accordion and snippet the keys act on
fn cursor_line(pane: &ContentPane, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();

    let accordions = pane.section().map(|s| s.accordion_ids()).unwrap_or_default();
    if let Some(id) = accordions.get(pane.accordion) {
        let marker = if pane.expand.is_expanded(id) { "▾" } else { "▸" };
        spans.push(Span::styled(format!("Section: {marker} {id}   "), theme.highlight));
    }

    let snippets = pane.visible_snippets();
    if let Some(snippet) = snippets.get(pane.snippet) {
        let label = snippet
            .title
            .clone()
            .unwrap_or_else(|| format!("{} snippet", snippet.language));
        spans.push(Span::styled(
            format!("Copy target: {label} ({}/{})", pane.snippet + 1, snippets.len()),
            theme.highlight,
        ));
    }

    Line::from(spans)
}
