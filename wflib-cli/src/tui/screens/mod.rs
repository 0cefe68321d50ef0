//! Screens of the interactive browser

pub mod catalog;
pub mod content;
pub mod dashboard;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};
use std::time::Instant;

use wflib_core::content::{current_footer_notice, Page, APP_TITLE};

use super::state::BrowserState;
use super::theme::Theme;

/// Top navigation: one tab per page
pub fn render_nav(frame: &mut Frame, area: Rect, state: &BrowserState<'_>, theme: &Theme) {
    let titles: Vec<Line> = Page::all()
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())))
        .collect();
    let selected = Page::all().iter().position(|p| *p == state.page).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme.muted)
        .highlight_style(theme.focused)
        .divider("|");
    frame.render_widget(tabs, area);
}

/// Bottom line: copy acknowledgement, status or key help
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    state: &BrowserState<'_>,
    theme: &Theme,
    now: Instant,
) {
    let line = if state.copy.is_copied(now) {
        Line::from(Span::styled("✓ Copied!", theme.success))
    } else if let Some(status) = &state.status {
        Line::from(Span::styled(status.clone(), theme.error))
    } else {
        Line::from(Span::styled(help_text(state), theme.muted))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn help_text(state: &BrowserState<'_>) -> String {
    let page_keys = match state.page {
        Page::Dashboard => "",
        Page::WorkflowTemplates | Page::CustomActions => {
            "/ search  ←/→ filter  ↑/↓ select  Enter details  c copy  x clear  "
        }
        Page::Documentation | Page::DeveloperTools | Page::Examples => {
            "←/→ tab  ↑/↓ scroll  n/p section  Enter open/close  [/] snippet  c copy  "
        }
    };
    format!("{page_keys}Tab next page  q quit  │ {APP_TITLE} {}", current_footer_notice())
}

/// Lines to styled text: "## " headings bold, fences dimmed
pub fn styled_lines(lines: Vec<String>, theme: &Theme) -> Vec<Line<'static>> {
    let mut in_code = false;
    lines
        .into_iter()
        .map(|line| {
            if line.trim_start().starts_with("```") {
                in_code = !in_code;
                return Line::from(Span::styled(line, theme.muted));
            }
            if in_code {
                Line::from(Span::styled(line, theme.code))
            } else if let Some(heading) = line.trim_start().strip_prefix("## ") {
                let indent = line.len() - line.trim_start().len();
                Line::from(Span::styled(
                    format!("{}{heading}", &line[..indent]),
                    theme.title,
                ))
            } else {
                Line::from(line)
            }
        })
        .collect()
}
