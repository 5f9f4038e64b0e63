//! Preview frame view
//!
//! Renders a text mock of a template's blocks, one bordered section per
//! block with placeholders left visible, so the structure can be judged
//! before inserting. Enter behaves exactly like the browse row the preview
//! was opened from.

use crate::action::Action;
use crate::component::Component;
use crate::library::buttons::ActionButton;
use crate::library::modal::ConnectArgs;
use crate::library::view::{LibraryView, ViewKind};
use crate::model::Template;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct PreviewFrame {
    template: Template,
    button: ActionButton,
    scroll: u16,
}

impl PreviewFrame {
    pub fn new(template: Template, button: ActionButton) -> Self {
        Self {
            template,
            button,
            scroll: 0,
        }
    }

    fn activate(&self) -> Action {
        if self.button.is_upsell() {
            let message = match self.template.tier_badge() {
                Some(badge) => format!("\"{}\" requires a {} license", self.template.title, badge),
                None => format!("\"{}\" requires an upgraded license", self.template.title),
            };
            Action::ShowConnect(ConnectArgs::with_message(message))
        } else {
            Action::InsertTemplate(self.template.id.clone())
        }
    }

    fn mock_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled(
                self.template.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", self.template.kind.name()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        if let Some(author) = &self.template.author {
            lines.push(Line::from(Span::styled(
                format!("by {}", author),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if let Some(url) = &self.template.url {
            lines.push(Line::from(vec![
                Span::styled("demo: ", Style::default().fg(Color::DarkGray)),
                Span::styled(url.clone(), Style::default().fg(Color::Cyan)),
            ]));
        }
        lines.push(Line::from(""));

        if self.template.content.is_empty() {
            lines.push(Line::from(Span::styled(
                "This entry has no block payload to preview.",
                Style::default().fg(Color::Yellow),
            )));
            return lines;
        }

        for block in &self.template.content {
            lines.push(Line::from(Span::styled(
                format!("┌─ {} {}", block.kind.icon(), block.kind.name()),
                Style::default().fg(Color::Magenta),
            )));
            if let Some(heading) = &block.heading {
                lines.push(Line::from(vec![
                    Span::styled("│  ", Style::default().fg(Color::Magenta)),
                    Span::styled(
                        heading.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            if let Some(body) = &block.body {
                lines.push(Line::from(vec![
                    Span::styled("│  ", Style::default().fg(Color::Magenta)),
                    Span::styled(body.clone(), Style::default().fg(Color::Gray)),
                ]));
            }
            lines.push(Line::from(Span::styled(
                "└────────────",
                Style::default().fg(Color::Magenta),
            )));
            lines.push(Line::from(""));
        }

        lines
    }
}

impl Component for PreviewFrame {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::ShowBrowse),
            KeyCode::Enter => Some(self.activate()),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                None
            }
            KeyCode::Char('o') => self
                .template
                .url
                .as_ref()
                .map(|url| Action::OpenUrl(url.clone())),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let lines = self.mock_lines();

        // Clamp so the last page stays on screen
        let visible = area.height.saturating_sub(2) as usize;
        let max_scroll = lines.len().saturating_sub(visible) as u16;
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }

        let preview = Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(preview, area);
        Ok(())
    }
}

impl LibraryView for PreviewFrame {
    fn kind(&self) -> ViewKind {
        ViewKind::PreviewFrame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::template::tests::create_test_template;
    use crate::model::TemplateKind;

    #[test]
    fn test_activate_mirrors_resolved_button() {
        let free = PreviewFrame::new(
            create_test_template("free", TemplateKind::Block, 0),
            ActionButton::Insert,
        );
        assert_eq!(free.activate(), Action::InsertTemplate("free".to_string()));

        let gated = PreviewFrame::new(
            create_test_template("gated", TemplateKind::Page, 2),
            ActionButton::GoExpert,
        );
        match gated.activate() {
            Action::ShowConnect(args) => {
                assert!(args.message.unwrap().contains("EXPERT"));
            }
            other => panic!("expected ShowConnect, got {:?}", other),
        }
    }

    #[test]
    fn test_mock_lines_cover_blocks() {
        let mut frame = PreviewFrame::new(
            create_test_template("hero", TemplateKind::Block, 0),
            ActionButton::Insert,
        );
        let lines = frame.mock_lines();
        assert!(lines.len() > 3);

        frame.template.content.clear();
        let lines = frame.mock_lines();
        assert!(lines
            .iter()
            .any(|l| l.spans.iter().any(|s| s.content.contains("no block payload"))));
    }
}
