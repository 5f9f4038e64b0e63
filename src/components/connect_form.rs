//! Connect form view - license key entry
//!
//! Reached from the toolbar or from activating a gated template; in the
//! latter case the originating upsell message is shown above the input.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::config::License;
use crate::library::modal::ConnectArgs;
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

pub struct ConnectForm {
    /// Why the user landed here, when coming from a gated template
    message: Option<String>,
    /// Current input text
    input: String,
    error: Option<String>,
}

impl ConnectForm {
    pub fn new(args: ConnectArgs) -> Self {
        Self {
            message: args.message,
            input: String::new(),
            error: None,
        }
    }
}

impl Component for ConnectForm {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::ShowBrowse),
            KeyCode::Enter => match License::parse(&self.input) {
                Ok(license) => Some(Action::ConnectLicense(license.key)),
                Err(e) => {
                    self.error = Some(e);
                    None
                }
            },
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
        let popup = centered_popup(area, 64, 12);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(popup);

        let mut intro = vec![Line::from("")];
        if let Some(message) = &self.message {
            intro.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow),
            )));
            intro.push(Line::from(""));
        }
        intro.push(Line::from(Span::styled(
            "Enter your license key to unlock gated templates.",
            Style::default().fg(Color::White),
        )));
        intro.push(Line::from(Span::styled(
            "Format: PRO-XXXX-XXXX-XXXX or EXP-XXXX-XXXX-XXXX",
            Style::default().fg(Color::DarkGray),
        )));

        let header = Paragraph::new(intro).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Connect ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

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

impl LibraryView for ConnectForm {
    fn kind(&self) -> ViewKind {
        ViewKind::ConnectForm
    }
}
