use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use wflib_core::catalog::Catalog;
use wflib_core::content::Dashboard;

use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, catalog: &Catalog, theme: &Theme) {
    let dash = Dashboard::from_catalog(catalog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(dash.title, theme.title)),
        Line::from(Span::styled(dash.subtitle, theme.muted)),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let stat_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, dash.stats.len().max(1) as u32); dash.stats.len()])
        .split(chunks[1]);
    for (stat, area) in dash.stats.iter().zip(stat_areas.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(stat.value.to_string(), theme.highlight)),
            Line::from(Span::styled(stat.name, theme.muted)),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, *area);
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    let mut popular = Vec::new();
    for w in &dash.popular {
        popular.push(Line::from(vec![
            Span::styled(format!("● {}  ", w.language), theme.tint(w.language_tint())),
            Span::styled(w.name.clone(), theme.title),
            Span::raw(format!("  ★ {}", w.star_count)),
        ]));
        popular.push(Line::from(Span::styled(
            format!("  {}", w.short_description()),
            theme.muted,
        )));
    }
    frame.render_widget(
        Paragraph::new(popular)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Popular Workflows ")),
        columns[0],
    );

    let mut activity = Vec::new();
    for item in dash.activity {
        activity.push(Line::from(item.action));
        activity.push(Line::from(Span::styled(
            format!("  {} · {}", item.time, item.user),
            theme.muted,
        )));
    }
    frame.render_widget(
        Paragraph::new(activity)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Recent Activity ")),
        columns[1],
    );

    let cta = Paragraph::new(vec![
        Line::from(Span::styled(dash.call_to_action.title.clone(), theme.title)),
        Line::from(dash.call_to_action.body.clone()),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(cta, chunks[3]);
}
