//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Library modal layout areas: a three-part header row over the content
/// region, with a help bar pinned to the bottom
pub struct ModalLayout {
    pub logo: Rect,
    pub menu: Rect,
    pub tools: Rect,
    pub content: Rect,
    pub help: Rect,
}

/// Editor screen layout areas
pub struct EditorLayout {
    pub blocks: Rect,
    pub side: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the library modal layout
pub fn modal_layout(area: Rect) -> ModalLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    // Header row: logo on the left, menu in the middle, tools on the right
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(24),
            Constraint::Length(30),
        ])
        .split(main_chunks[0]);

    ModalLayout {
        logo: header_chunks[0],
        menu: header_chunks[1],
        tools: header_chunks[2],
        content: main_chunks[1],
        help: main_chunks[2],
    }
}

/// Calculate the editor screen layout
pub fn editor_layout(area: Rect) -> EditorLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(main_chunks[0]);

    EditorLayout {
        blocks: content_chunks[0],
        side: content_chunks[1],
        status: main_chunks[1],
        help: main_chunks[2],
    }
}
