use anyhow::Result;
use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    layout::{Constraint, Direction, Layout, Margin},
    DefaultTerminal, Frame,
};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use wflib_core::catalog::Catalog;
use wflib_core::content::Page;
use wflib_core::snippet::{Clipboard, MemoryClipboard};

use super::screens;
use super::state::BrowserState;
use super::theme::Theme;
use crate::clipboard::SystemClipboard;

/// How often the screen refreshes without input, so the copy flag can revert
const TICK: Duration = Duration::from_millis(100);

/// Where copies go; falls back to memory when no system clipboard exists
enum CopyTarget {
    System(SystemClipboard),
    Memory(MemoryClipboard),
}

impl Clipboard for CopyTarget {
    fn copy(&mut self, text: &str) -> wflib_core::Result<()> {
        match self {
            CopyTarget::System(c) => c.copy(text),
            CopyTarget::Memory(c) => c.copy(text),
        }
    }
}

/// Main application struct
pub struct App<'a> {
    state: BrowserState<'a>,
    theme: Theme,
    clipboard: CopyTarget,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a Catalog, color: bool) -> Self {
        let clipboard = match SystemClipboard::new() {
            Ok(c) => CopyTarget::System(c),
            Err(e) => {
                warn!("System clipboard unavailable, copies stay in memory: {e}");
                CopyTarget::Memory(MemoryClipboard::default())
            }
        };

        Self {
            state: BrowserState::new(catalog),
            theme: Theme::for_config(color),
            clipboard,
        }
    }

    /// Run until the user quits
    pub fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = self.main_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.clear()?;

        while !self.state.should_quit {
            let now = Instant::now();
            terminal.draw(|frame| self.render(frame, now))?;

            if !event::poll(TICK)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // A fresh key press dismisses the last status message
                    self.state.status = None;
                    self.state.handle_key(key, &mut self.clipboard, Instant::now());
                }
                Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
                _ => {}
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame, now: Instant) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        screens::render_nav(frame, chunks[0], &self.state, &self.theme);

        let body = chunks[1].inner(Margin::new(1, 1));
        match self.state.page {
            Page::Dashboard => screens::dashboard::render(frame, body, self.state.catalog, &self.theme),
            Page::WorkflowTemplates | Page::CustomActions => {
                screens::catalog::render(frame, body, &self.state, &self.theme)
            }
            Page::Documentation | Page::DeveloperTools | Page::Examples => {
                if let Some(pane) = self.state.content_pane() {
                    screens::content::render(frame, body, pane, &self.theme);
                }
            }
        }

        screens::render_status(frame, chunks[2], &self.state, &self.theme, now);
    }
}
