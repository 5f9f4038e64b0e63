//! Import form view - bring a template JSON file into the local store

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::library::view::{LibraryView, ViewKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct ImportForm {
    /// Current input text
    input: String,
    error: Option<String>,
}

impl ImportForm {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            error: None,
        }
    }
}

impl Default for ImportForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ImportForm {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::ShowBrowse),
            KeyCode::Enter => {
                if self.input.trim().is_empty() {
                    self.error = Some("Enter a path to a template file".to_string());
                    None
                } else {
                    Some(Action::ImportTemplate(self.input.trim().to_string()))
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.error = None;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 64, 10);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(popup);

        let intro = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Path to a template JSON file:",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                "The file is copied into My Templates.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Import ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(intro, chunks[0]);

        let input = Paragraph::new(Line::from(Span::styled(
            format!("{}_", self.input),
            Style::default().fg(Color::Cyan),
        )))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(input, chunks[1]);

        if let Some(error) = &self.error {
            let error_line = Paragraph::new(Line::from(Span::styled(
                format!(" ✗ {}", error),
                Style::default().fg(Color::Red),
            )));
            frame.render_widget(error_line, chunks[2]);
        }

        Ok(())
    }
}

impl LibraryView for ImportForm {
    fn kind(&self) -> ViewKind {
        ViewKind::ImportForm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_enter_with_empty_input_sets_error() {
        let mut form = ImportForm::new();
        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, None);
        assert!(form.error.is_some());
    }

    #[test]
    fn test_enter_emits_trimmed_path() {
        let mut form = ImportForm::new();
        for c in " /tmp/t.json ".chars() {
            form.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }

        let action = form.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::ImportTemplate("/tmp/t.json".to_string())));
    }

    #[test]
    fn test_esc_returns_to_browse() {
        let mut form = ImportForm::new();
        let action = form.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::ShowBrowse));
    }
}
