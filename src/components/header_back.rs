//! Back header view
//!
//! Replaces the logo on sub-screens to signal that Esc returns to the
//! browse screen.

use crate::component::Component;
use crate::library::view::{LibraryView, ViewKind};
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct BackView;

impl Default for BackView {
    fn default() -> Self {
        Self::new()
    }
}

impl BackView {
    pub fn new() -> Self {
        Self
    }
}

impl Component for BackView {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let back = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(" ◀ ", Style::default().fg(Color::Yellow)),
                Span::styled("Back", Style::default().fg(Color::DarkGray)),
            ]),
        ])
        .block(Block::default().borders(Borders::BOTTOM));

        frame.render_widget(back, area);
        Ok(())
    }
}

impl LibraryView for BackView {
    fn kind(&self) -> ViewKind {
        ViewKind::HeaderBack
    }
}
