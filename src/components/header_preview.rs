//! Preview header view
//!
//! Shown in the tools region while a template is previewed: the resolved
//! action button plus the tier badge, so the outcome of pressing Enter is
//! visible before committing.

use crate::component::Component;
use crate::library::buttons::ActionButton;
use crate::library::view::{LibraryView, ViewKind};
use crate::model::Template;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct PreviewHeaderView {
    template: Template,
    button: ActionButton,
}

impl PreviewHeaderView {
    pub fn new(template: Template, button: ActionButton) -> Self {
        Self { template, button }
    }
}

impl Component for PreviewHeaderView {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut spans = Vec::new();

        if let Some(badge) = self.template.tier_badge() {
            spans.push(Span::styled(
                format!(" {} ", badge),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }

        let button_style = if self.button.is_upsell() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!(" ⏎ {} ", self.button.label()), button_style));
        spans.push(Span::raw(" "));

        let header = Paragraph::new(vec![Line::from(""), Line::from(spans)])
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::BOTTOM));

        frame.render_widget(header, area);
        Ok(())
    }
}

impl LibraryView for PreviewHeaderView {
    fn kind(&self) -> ViewKind {
        ViewKind::HeaderPreview
    }
}
