//! Logo header view - the app mark shown in the library's logo region

use crate::component::Component;
use crate::library::view::{LibraryView, ViewKind};
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct LogoView;

impl Default for LogoView {
    fn default() -> Self {
        Self::new()
    }
}

impl LogoView {
    pub fn new() -> Self {
        Self
    }
}

impl Component for LogoView {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mark = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " ▛ ",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "pagecraft",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ])
        .block(Block::default().borders(Borders::BOTTOM));

        frame.render_widget(mark, area);
        Ok(())
    }
}

impl LibraryView for LogoView {
    fn kind(&self) -> ViewKind {
        ViewKind::HeaderLogo
    }
}
