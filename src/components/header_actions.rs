//! Actions header view - the library toolbar
//!
//! Lists the screen shortcuts available from the browse screen. The keys
//! themselves are handled by the template list view; this region is
//! display-only.

use crate::component::Component;
use crate::library::view::{LibraryView, ViewKind};
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct ActionsView;

impl Default for ActionsView {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionsView {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ActionsView {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let key = Style::default().fg(Color::Yellow);
        let label = Style::default().fg(Color::DarkGray);

        let toolbar = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("i", key),
                Span::styled(" Import  ", label),
                Span::styled("s", key),
                Span::styled(" Save  ", label),
                Span::styled("c", key),
                Span::styled(" Connect  ", label),
                Span::styled("r", key),
                Span::styled(" Refresh ", label),
            ]),
        ])
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::BOTTOM));

        frame.render_widget(toolbar, area);
        Ok(())
    }
}

impl LibraryView for ActionsView {
    fn kind(&self) -> ViewKind {
        ViewKind::HeaderActions
    }
}
