//! Template list view - the browse screen's content region
//!
//! Owns list navigation and search; every row carries the action button
//! resolved for it at mount time, so activation needs no further policy
//! decisions.

use crate::action::Action;
use crate::component::Component;
use crate::library::buttons::ActionButton;
use crate::library::modal::ConnectArgs;
use crate::library::view::{LibraryView, ViewKind};
use crate::model::{Category, TemplateKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// One browse row: a template plus the action button resolved for it
#[derive(Debug, Clone)]
pub struct TemplateRow {
    pub template: crate::model::Template,
    pub button: ActionButton,
}

/// Template list view
pub struct TemplateListView {
    category: Category,
    rows: Vec<TemplateRow>,
    /// Selection index into the filtered rows
    selected: usize,
    list_state: ListState,
    search_mode: bool,
    search_query: String,
}

impl TemplateListView {
    pub fn new(category: Category, rows: Vec<TemplateRow>) -> Self {
        Self {
            category,
            rows,
            selected: 0,
            list_state: ListState::default(),
            search_mode: false,
            search_query: String::new(),
        }
    }

    /// Rows matching the current search query
    pub fn filtered(&self) -> Vec<&TemplateRow> {
        self.rows
            .iter()
            .filter(|row| row.template.matches_query(&self.search_query))
            .collect()
    }

    pub fn selected_row(&self) -> Option<&TemplateRow> {
        let filtered = self.filtered();
        filtered.get(self.selected).copied()
    }

    fn select_next(&mut self) {
        let count = self.filtered().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_last(&mut self) {
        self.selected = self.filtered().len().saturating_sub(1);
    }

    fn next_category(&self) -> Category {
        let all = Category::all();
        let idx = all.iter().position(|c| *c == self.category).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// What pressing Enter on the selected row does: insert for unlocked
    /// templates, route to the connect screen for gated ones
    fn activate(&self) -> Option<Action> {
        let row = self.selected_row()?;

        if row.button.is_upsell() {
            let message = match row.template.tier_badge() {
                Some(badge) => {
                    format!("\"{}\" requires a {} license", row.template.title, badge)
                }
                None => format!("\"{}\" requires an upgraded license", row.template.title),
            };
            return Some(Action::ShowConnect(ConnectArgs::with_message(message)));
        }

        Some(Action::InsertTemplate(row.template.id.clone()))
    }
}

impl Component for TemplateListView {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.search_mode {
            match key.code {
                KeyCode::Esc => {
                    self.search_mode = false;
                    self.search_query.clear();
                    self.selected = 0;
                }
                KeyCode::Enter => self.search_mode = false,
                KeyCode::Backspace => {
                    self.search_query.pop();
                    self.selected = 0;
                }
                KeyCode::Char(c) => {
                    self.search_query.push(c);
                    self.selected = 0;
                }
                _ => {}
            }
            return Ok(None);
        }

        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseLibrary),

            // Navigation
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Char('g') => {
                self.selected = 0;
                None
            }
            KeyCode::Char('G') => {
                self.select_last();
                None
            }

            // Row activation
            KeyCode::Enter => self.activate(),
            KeyCode::Char('p') => self
                .selected_row()
                .map(|row| Action::ShowPreview(row.template.id.clone())),

            // Search
            KeyCode::Char('/') => {
                self.search_mode = true;
                None
            }

            // Categories
            KeyCode::Tab => Some(Action::SwitchCategory(self.next_category())),
            KeyCode::Char(c) if c.is_ascii_digit() => Category::all()
                .into_iter()
                .find(|category| category.shortcut() == c)
                .map(Action::SwitchCategory),

            // Screens
            KeyCode::Char('i') => Some(Action::ShowImport),
            KeyCode::Char('c') => Some(Action::ShowConnect(ConnectArgs::default())),
            KeyCode::Char('s') => Some(Action::ShowSaveTemplate),
            KeyCode::Char('r') => Some(Action::RefreshCatalog),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let filtered = self.filtered();

        // Summary line, replaced by the search input while searching
        let summary = if self.search_mode || !self.search_query.is_empty() {
            let cursor = if self.search_mode { "_" } else { "" };
            Line::from(vec![
                Span::styled(" /", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{}{}", self.search_query, cursor),
                    Style::default().fg(Color::White),
                ),
            ])
        } else {
            Line::from(Span::styled(
                format!(" {} · {} templates", self.category.name(), filtered.len()),
                Style::default().fg(Color::DarkGray),
            ))
        };
        frame.render_widget(Paragraph::new(summary), chunks[0]);

        if filtered.is_empty() {
            let text = if self.search_query.is_empty() {
                match self.category {
                    Category::Saved => "Nothing saved yet. Press s on the browse screen to save the current page.",
                    _ => "No templates in this category.",
                }
                .to_string()
            } else {
                format!("No matches for \"{}\"", self.search_query)
            };

            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(text, Style::default().fg(Color::Yellow))),
            ])
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::NONE));
            frame.render_widget(empty, chunks[1]);
            return Ok(());
        }

        let title_width = (area.width as usize).saturating_sub(36).clamp(16, 48);
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|row| {
                let marker = match row.template.kind {
                    TemplateKind::Block => "▢",
                    TemplateKind::Page => "▣",
                };

                let mut spans = vec![
                    Span::styled(format!(" {} ", marker), Style::default().fg(Color::Yellow)),
                    Span::styled(
                        pad_to_width(&row.template.title, title_width),
                        Style::default().fg(Color::White),
                    ),
                ];

                match row.template.tier_badge() {
                    Some("EXPERT") => spans.push(Span::styled(
                        " EXPERT ",
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Some(badge) => spans.push(Span::styled(
                        format!(" {} ", badge),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                    None => spans.push(Span::raw("        ")),
                }

                spans.push(Span::styled(
                    format!("{:>2} blk  ", row.template.block_count()),
                    Style::default().fg(Color::DarkGray),
                ));

                let button_style = if row.button.is_upsell() {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Green)
                };
                spans.push(Span::styled(
                    format!("[{}]", row.button.label()),
                    button_style,
                ));

                ListItem::new(Line::from(spans))
            })
            .collect();

        self.list_state.select(Some(self.selected));

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);
        Ok(())
    }
}

impl LibraryView for TemplateListView {
    fn kind(&self) -> ViewKind {
        ViewKind::TemplateList
    }
}

/// Pad or truncate to a fixed display width so badge and button columns line
/// up across rows
fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    format!("{}{}", out, " ".repeat(width.saturating_sub(used + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::template::tests::create_test_template;
    use crossterm::event::KeyModifiers;

    fn rows() -> Vec<TemplateRow> {
        vec![
            TemplateRow {
                template: create_test_template("free", TemplateKind::Block, 0),
                button: ActionButton::Insert,
            },
            TemplateRow {
                template: create_test_template("gated", TemplateKind::Block, 1),
                button: ActionButton::GoPro,
            },
        ]
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_activate_free_row_inserts() {
        let view = TemplateListView::new(Category::Blocks, rows());
        assert_eq!(
            view.activate(),
            Some(Action::InsertTemplate("free".to_string()))
        );
    }

    #[test]
    fn test_activate_gated_row_routes_to_connect() {
        let mut view = TemplateListView::new(Category::Blocks, rows());
        view.select_next();

        match view.activate() {
            Some(Action::ShowConnect(args)) => {
                let message = args.message.unwrap();
                assert!(message.contains("Template gated"));
                assert!(message.contains("PRO"));
            }
            other => panic!("expected ShowConnect, got {:?}", other),
        }
    }

    #[test]
    fn test_activate_on_empty_list_is_noop() {
        let view = TemplateListView::new(Category::Saved, Vec::new());
        assert_eq!(view.activate(), None);
    }

    #[test]
    fn test_search_narrows_then_esc_clears() {
        let mut view = TemplateListView::new(Category::Blocks, rows());

        view.handle_key_event(key(KeyCode::Char('/'))).unwrap();
        view.handle_key_event(key(KeyCode::Char('g'))).unwrap();
        view.handle_key_event(key(KeyCode::Char('a'))).unwrap();
        assert_eq!(view.filtered().len(), 1);
        assert_eq!(view.filtered()[0].template.id, "gated");

        // Esc inside search mode clears the query without closing anything
        let action = view.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(action, None);
        assert_eq!(view.filtered().len(), 2);

        // A second Esc closes the library
        let action = view.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::CloseLibrary));
    }

    #[test]
    fn test_category_shortcuts() {
        let mut view = TemplateListView::new(Category::Blocks, rows());

        let action = view.handle_key_event(key(KeyCode::Char('2'))).unwrap();
        assert_eq!(action, Some(Action::SwitchCategory(Category::Pages)));

        let action = view.handle_key_event(key(KeyCode::Char('9'))).unwrap();
        assert_eq!(action, None);

        let action = view.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(action, Some(Action::SwitchCategory(Category::Pages)));
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut view = TemplateListView::new(Category::Blocks, rows());

        view.select_prev();
        assert_eq!(view.selected_row().unwrap().template.id, "free");

        view.select_next();
        view.select_next();
        view.select_next();
        assert_eq!(view.selected_row().unwrap().template.id, "gated");
    }

    #[test]
    fn test_pad_to_width_handles_wide_and_narrow() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        let padded = pad_to_width("a very long template title", 10);
        assert_eq!(padded.width(), 10);
        assert!(padded.ends_with('…'));
    }
}
