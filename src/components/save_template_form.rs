//! Save-template form view
//!
//! Bound to a snapshot of the page taken at transition time; shows what
//! would be saved and collects a name and kind for it.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::library::view::{LibraryView, ViewKind};
use crate::model::{Page, TemplateKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct SaveTemplateForm {
    page: Page,
    /// Current input text, pre-filled from the page title
    name: String,
    kind: TemplateKind,
    error: Option<String>,
}

impl SaveTemplateForm {
    pub fn new(page: Page) -> Self {
        let name = page.title.clone();
        Self {
            page,
            name,
            kind: TemplateKind::Page,
            error: None,
        }
    }

    pub fn block_count(&self) -> usize {
        self.page.blocks.len()
    }

    fn toggle_kind(&mut self) {
        self.kind = match self.kind {
            TemplateKind::Page => TemplateKind::Block,
            TemplateKind::Block => TemplateKind::Page,
        };
    }
}

impl Component for SaveTemplateForm {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::ShowBrowse),
            KeyCode::Tab => {
                self.toggle_kind();
                None
            }
            KeyCode::Enter => {
                if self.page.blocks.is_empty() {
                    self.error = Some("The page has no blocks to save".to_string());
                    None
                } else if self.name.trim().is_empty() {
                    self.error = Some("Give the template a name".to_string());
                    None
                } else {
                    Some(Action::SaveTemplate {
                        name: self.name.trim().to_string(),
                        kind: self.kind,
                    })
                }
            }
            KeyCode::Backspace => {
                self.name.pop();
                self.error = None;
                None
            }
            KeyCode::Char(c) => {
                self.name.push(c);
                self.error = None;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 64, 13);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(popup);

        let intro = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Saving ", Style::default().fg(Color::White)),
                Span::styled(
                    format!("{} blocks", self.block_count()),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" from \"{}\"", self.page.title),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(Span::styled(
                "The template lands in My Templates.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Save Template ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(intro, chunks[0]);

        let input = Paragraph::new(Line::from(Span::styled(
            format!("{}_", self.name),
            Style::default().fg(Color::Cyan),
        )))
        .block(Block::default().borders(Borders::ALL).title(" Name "));
        frame.render_widget(input, chunks[1]);

        let kind_line = Paragraph::new(Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Yellow)),
            Span::styled("kind: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.kind.name(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(kind_line, chunks[2]);

        if let Some(error) = &self.error {
            let error_line = Paragraph::new(Line::from(Span::styled(
                format!(" ✗ {}", error),
                Style::default().fg(Color::Red),
            )));
            frame.render_widget(error_line, chunks[3]);
        }

        Ok(())
    }
}

impl LibraryView for SaveTemplateForm {
    fn kind(&self) -> ViewKind {
        ViewKind::SaveTemplateForm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, BlockKind};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn page() -> Page {
        let mut page = Page::default();
        page.title = "Launch".to_string();
        page.blocks.push(Block::new(BlockKind::Hero));
        page
    }

    #[test]
    fn test_bound_to_page_snapshot() {
        let form = SaveTemplateForm::new(page());
        assert_eq!(form.block_count(), 1);
        assert_eq!(form.name, "Launch");
    }

    #[test]
    fn test_enter_emits_save_with_toggled_kind() {
        let mut form = SaveTemplateForm::new(page());
        form.handle_key_event(key(KeyCode::Tab)).unwrap();

        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(
            action,
            Some(Action::SaveTemplate {
                name: "Launch".to_string(),
                kind: TemplateKind::Block,
            })
        );
    }

    #[test]
    fn test_empty_page_cannot_be_saved() {
        let mut form = SaveTemplateForm::new(Page::default());
        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, None);
        assert!(form.error.is_some());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut form = SaveTemplateForm::new(page());
        for _ in 0.."Launch".len() {
            form.handle_key_event(key(KeyCode::Backspace)).unwrap();
        }

        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, None);
        assert!(form.error.is_some());
    }
}
