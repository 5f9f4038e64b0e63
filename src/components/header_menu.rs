//! Menu header view - category switcher shown on the browse screen

use crate::component::Component;
use crate::library::view::{LibraryView, ViewKind};
use crate::model::Category;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct MenuView;

impl Default for MenuView {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuView {
    pub fn new() -> Self {
        Self
    }
}

impl Component for MenuView {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut spans = Vec::new();
        for category in Category::all() {
            spans.push(Span::styled(
                format!(" {} ", category.shortcut()),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::styled(
                category.name().to_string(),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::raw("  "));
        }

        let menu = Paragraph::new(vec![Line::from(""), Line::from(spans)])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));

        frame.render_widget(menu, area);
        Ok(())
    }
}

impl LibraryView for MenuView {
    fn kind(&self) -> ViewKind {
        ViewKind::HeaderMenu
    }
}
