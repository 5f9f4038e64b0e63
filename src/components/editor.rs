//! Editor component - Main application screen
//!
//! Shows the working page as an ordered block list with a side panel of
//! page facts and recent template inserts. Owns list navigation state;
//! mutations go through Actions so the App can keep the page and the
//! insert history in step.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::editor_layout;
use crate::model::{InsertHistoryEntry, Page};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::path::Path;

// ═══════════════════════════════════════════════════════════════════════════════
// Editor Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Editor component for the block list view
pub struct EditorComponent {
    /// Index of the selected block
    pub selected: usize,
    /// List selection state
    pub list_state: ListState,
}

impl Default for EditorComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorComponent {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    pub fn select_next(&mut self, block_count: usize) {
        if block_count > 0 && self.selected + 1 < block_count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection on a valid index after blocks are added or removed
    pub fn clamp_selection(&mut self, block_count: usize) {
        if block_count == 0 {
            self.selected = 0;
        } else if self.selected >= block_count {
            self.selected = block_count - 1;
        }
    }
}

impl Component for EditorComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('q') => Some(Action::Quit),

            // Navigation
            KeyCode::Down | KeyCode::Char('j') => Some(Action::NextBlock),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::PrevBlock),

            // Reordering (Shift+j/k)
            KeyCode::Char('J') => Some(Action::MoveBlockDown),
            KeyCode::Char('K') => Some(Action::MoveBlockUp),

            // Editing
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteBlock),
            KeyCode::Char('s') => Some(Action::SavePage),

            // Library
            KeyCode::Char('t') => Some(Action::OpenLibrary),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_editor_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the editor screen
pub struct EditorRenderContext<'a> {
    pub page: &'a Page,
    pub page_path: &'a Path,
    pub page_dirty: bool,
    pub insert_history: &'a [InsertHistoryEntry],
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the editor screen
pub fn draw_editor_screen(
    frame: &mut Frame,
    area: Rect,
    editor: &mut EditorComponent,
    ctx: &EditorRenderContext,
) -> Result<()> {
    let layout = editor_layout(area);

    render_block_list(frame, layout.blocks, editor, ctx);
    render_side_panel(frame, layout.side, ctx);
    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help);

    Ok(())
}

fn render_block_list(
    frame: &mut Frame,
    area: Rect,
    editor: &mut EditorComponent,
    ctx: &EditorRenderContext,
) {
    let dirty_marker = if ctx.page_dirty { " *" } else { "" };
    let title = format!(" Page: {}{} ", ctx.page.title, dirty_marker);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );

    if ctx.page.blocks.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "The page is empty.",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press t to open the template library and insert blocks.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = ctx
        .page
        .blocks
        .iter()
        .enumerate()
        .map(|(i, b)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3} ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{} ", b.kind.icon()), Style::default().fg(Color::Yellow)),
                Span::styled(b.label().to_string(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {}", b.kind.name()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    editor.list_state.select(Some(editor.selected));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut editor.list_state);
}

fn render_side_panel(frame: &mut Frame, area: Rect, ctx: &EditorRenderContext) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("file: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                ctx.page_path.display().to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("blocks: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                ctx.page.blocks.len().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Settings",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for (key, value) in &ctx.page.settings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", key), Style::default().fg(Color::DarkGray)),
            Span::styled(value.clone(), Style::default().fg(Color::White)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Recent inserts",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )));

    if ctx.insert_history.is_empty() {
        lines.push(Line::from(Span::styled(
            "  none yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for entry in ctx.insert_history.iter().take(5) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", entry.formatted_time()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(entry.title.clone(), Style::default().fg(Color::White)),
            Span::styled(
                format!(" +{}", entry.blocks_added),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Overview "),
    );
    frame.render_widget(panel, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &EditorRenderContext) {
    let line = if let Some(error) = ctx.error {
        Line::from(Span::styled(
            format!(" ✗ {}", error),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(message) = ctx.status_message {
        Line::from(Span::styled(
            format!(" ✓ {}", message),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            " ready",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let help = Paragraph::new(Line::from(vec![
        Span::styled(" t ", key),
        Span::raw("Templates  "),
        Span::styled(" j/k ", key),
        Span::raw("Select  "),
        Span::styled(" J/K ", key),
        Span::raw("Move  "),
        Span::styled(" d ", key),
        Span::raw("Delete  "),
        Span::styled(" s ", key),
        Span::raw("Save  "),
        Span::styled(" q ", key),
        Span::raw("Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
