//! The template library modal - region owner and screen controller
//!
//! One modal window, four fixed regions (logo, tools, menu, content), and a
//! closed set of screens. Each `show_*` operation is a complete, synchronous
//! transition: it resets the regions that are not valid on the target screen
//! and installs freshly constructed views into the ones that are. The menu
//! region only ever holds content on the browse screen; every transition away
//! resets it first, and returning to browse rebuilds it through
//! `show_default_header`.
//!
//! The modal owns no business data. Views are bound to snapshots of their
//! input at construction; catalog lookups, persistence and license state stay
//! with the command layer (`App`).

use crate::action::Action;
use crate::components::layout::modal_layout;
use crate::components::{
    ActionsView, BackView, ConnectForm, ImportForm, LogoView, MenuView, PreviewFrame,
    PreviewHeaderView, SaveTemplateForm, TemplateListView, TemplateRow,
};
use crate::library::buttons::{resolve_action_button, ActionButton};
use crate::library::filters::FilterRegistry;
use crate::library::region::{Region, RegionName};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::rc::Rc;

/// The screens the library can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Browse,
    Import,
    Connect,
    SaveTemplate,
    Preview,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Browse => "Template Library",
            Screen::Import => "Import Template",
            Screen::Connect => "Connect",
            Screen::SaveTemplate => "Save Template",
            Screen::Preview => "Preview",
        }
    }
}

/// Input bound into the connect form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectArgs {
    /// Contextual intro shown above the form, e.g. the upsell that led here
    pub message: Option<String>,
}

impl ConnectArgs {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// The library modal: four regions plus the transition rules between screens
pub struct LibraryModal {
    pub logo: Region,
    pub tools: Region,
    pub menu: Region,
    pub content: Region,
    filters: Rc<FilterRegistry>,
    screen: Screen,
}

impl LibraryModal {
    /// Create the modal with all regions empty. The caller follows up with
    /// `show_default_header` and `show_templates` to land on the browse
    /// screen.
    pub fn new(filters: Rc<FilterRegistry>) -> Self {
        Self {
            logo: Region::new(RegionName::Logo),
            tools: Region::new(RegionName::Tools),
            menu: Region::new(RegionName::Menu),
            content: Region::new(RegionName::Content),
            filters,
            screen: Screen::Browse,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Resolve the action button for a template through the filter chain
    pub fn resolve_button(&self, template: &crate::model::Template) -> ActionButton {
        resolve_action_button(&self.filters, template)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Screen transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Rebuild the browse-screen header: actions into tools, category menu
    /// into menu, app mark into logo. Never touches the content region.
    pub fn show_default_header(&mut self) {
        self.tools.show(Box::new(ActionsView::new()));
        self.menu.show(Box::new(MenuView::new()));
        self.logo.show(Box::new(LogoView::new()));
        self.screen = Screen::Browse;
    }

    /// Mount a template collection into the content region
    pub fn show_templates(&mut self, collection: crate::model::TemplateCollection) {
        let rows: Vec<TemplateRow> = collection
            .templates
            .iter()
            .map(|template| TemplateRow {
                button: resolve_action_button(&self.filters, template),
                template: template.clone(),
            })
            .collect();
        self.content
            .show(Box::new(TemplateListView::new(collection.category, rows)));
        self.screen = Screen::Browse;
    }

    /// Switch to the import screen
    pub fn show_import(&mut self) {
        self.menu.reset();
        self.content.show(Box::new(ImportForm::new()));
        self.logo.show(Box::new(BackView::new()));
        self.screen = Screen::Import;
    }

    /// Switch to the license connect screen
    pub fn show_connect(&mut self, args: ConnectArgs) {
        self.menu.reset();
        self.content.show(Box::new(ConnectForm::new(args)));
        self.screen = Screen::Connect;
    }

    /// Switch to the save-template screen over a snapshot of the page
    pub fn show_save_template(&mut self, page: crate::model::Page) {
        self.menu.reset();
        self.content.show(Box::new(SaveTemplateForm::new(page)));
        self.screen = Screen::SaveTemplate;
    }

    /// Switch to the preview screen for a template
    pub fn show_preview(&mut self, template: crate::model::Template) {
        let button = resolve_action_button(&self.filters, &template);
        self.menu.reset();
        self.content
            .show(Box::new(PreviewFrame::new(template.clone(), button)));
        self.tools
            .show(Box::new(PreviewHeaderView::new(template, button)));
        self.logo.show(Box::new(BackView::new()));
        self.screen = Screen::Preview;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Event routing and rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Route a key event to the active content view
    ///
    /// Content views own their keys, including Esc (back/close); header
    /// regions are display-only.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        self.content.handle_key_event(key)
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Full-screen overlay with a small margin, like the editor's other
        // overlays
        let margin = 1;
        let window = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        frame.render_widget(Clear, window);

        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(format!(" {} ", self.screen.title()))
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = frame_block.inner(window);
        frame.render_widget(frame_block, window);

        let layout = modal_layout(inner);
        self.logo.draw(frame, layout.logo)?;
        self.menu.draw(frame, layout.menu)?;
        self.tools.draw(frame, layout.tools)?;
        self.content.draw(frame, layout.content)?;
        self.draw_help(frame, layout.help);

        Ok(())
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let spans = match self.screen {
            Screen::Browse => vec![
                Span::styled(" Enter ", key_style()),
                Span::raw("Activate  "),
                Span::styled(" p ", key_style()),
                Span::raw("Preview  "),
                Span::styled(" / ", key_style()),
                Span::raw("Search  "),
                Span::styled(" 1-3 ", key_style()),
                Span::raw("Category  "),
                Span::styled(" Esc ", key_style()),
                Span::raw("Close"),
            ],
            Screen::Preview => vec![
                Span::styled(" Enter ", key_style()),
                Span::raw("Activate  "),
                Span::styled(" j/k ", key_style()),
                Span::raw("Scroll  "),
                Span::styled(" o ", key_style()),
                Span::raw("Open URL  "),
                Span::styled(" Esc ", key_style()),
                Span::raw("Back"),
            ],
            Screen::Import | Screen::Connect | Screen::SaveTemplate => vec![
                Span::styled(" Enter ", key_style()),
                Span::raw("Confirm  "),
                Span::styled(" Esc ", key_style()),
                Span::raw("Back"),
            ],
        };

        let help = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(help, area);
    }
}

fn key_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::view::ViewKind;
    use crate::model::template::tests::create_test_template;
    use crate::model::{Category, Page, TemplateCollection, TemplateKind};

    fn modal() -> LibraryModal {
        LibraryModal::new(Rc::new(FilterRegistry::new()))
    }

    fn blocks_collection() -> TemplateCollection {
        TemplateCollection::new(
            Category::Blocks,
            vec![
                create_test_template("hero", TemplateKind::Block, 0),
                create_test_template("pricing", TemplateKind::Block, 1),
            ],
        )
    }

    #[test]
    fn test_new_modal_has_four_empty_regions() {
        let modal = modal();
        assert!(modal.logo.is_empty());
        assert!(modal.tools.is_empty());
        assert!(modal.menu.is_empty());
        assert!(modal.content.is_empty());
        assert_eq!(modal.screen(), Screen::Browse);
    }

    #[test]
    fn test_default_header_populates_three_regions_not_content() {
        let mut modal = modal();
        modal.show_default_header();

        assert_eq!(modal.tools.occupant_kind(), Some(ViewKind::HeaderActions));
        assert_eq!(modal.menu.occupant_kind(), Some(ViewKind::HeaderMenu));
        assert_eq!(modal.logo.occupant_kind(), Some(ViewKind::HeaderLogo));
        assert!(modal.content.is_empty());
    }

    #[test]
    fn test_show_templates_fills_content_only() {
        let mut modal = modal();
        modal.show_default_header();
        modal.show_templates(blocks_collection());

        assert_eq!(modal.content.occupant_kind(), Some(ViewKind::TemplateList));
        assert_eq!(modal.menu.occupant_kind(), Some(ViewKind::HeaderMenu));
        assert_eq!(modal.screen(), Screen::Browse);
    }

    #[test]
    fn test_non_default_screens_always_empty_the_menu() {
        let cases: [fn(&mut LibraryModal); 4] = [
            |m| m.show_import(),
            |m| m.show_connect(ConnectArgs::default()),
            |m| m.show_save_template(Page::default()),
            |m| m.show_preview(create_test_template("t", TemplateKind::Block, 0)),
        ];

        for transition in cases {
            let mut modal = modal();
            modal.show_default_header();
            modal.show_templates(blocks_collection());
            assert!(!modal.menu.is_empty());

            transition(&mut modal);
            assert!(modal.menu.is_empty(), "menu must reset on every non-default screen");
        }
    }

    #[test]
    fn test_import_screen_regions() {
        let mut modal = modal();
        modal.show_default_header();
        modal.show_import();

        assert_eq!(modal.content.occupant_kind(), Some(ViewKind::ImportForm));
        assert_eq!(modal.logo.occupant_kind(), Some(ViewKind::HeaderBack));
        // Tools keeps whatever it had
        assert_eq!(modal.tools.occupant_kind(), Some(ViewKind::HeaderActions));
        assert_eq!(modal.screen(), Screen::Import);
    }

    #[test]
    fn test_preview_screen_regions() {
        let mut modal = modal();
        modal.show_default_header();
        modal.show_preview(create_test_template("hero", TemplateKind::Block, 2));

        assert_eq!(modal.content.occupant_kind(), Some(ViewKind::PreviewFrame));
        assert_eq!(modal.tools.occupant_kind(), Some(ViewKind::HeaderPreview));
        assert_eq!(modal.logo.occupant_kind(), Some(ViewKind::HeaderBack));
        assert!(modal.menu.is_empty());
        assert_eq!(modal.screen(), Screen::Preview);
    }

    #[test]
    fn test_save_then_default_header_leaves_content_untouched() {
        let mut modal = modal();
        modal.show_default_header();
        modal.show_templates(blocks_collection());

        modal.show_save_template(Page::default());
        assert!(modal.menu.is_empty());
        assert_eq!(
            modal.content.occupant_kind(),
            Some(ViewKind::SaveTemplateForm)
        );

        modal.show_default_header();
        assert!(!modal.menu.is_empty());
        assert!(!modal.tools.is_empty());
        assert!(!modal.logo.is_empty());
        assert_eq!(
            modal.content.occupant_kind(),
            Some(ViewKind::SaveTemplateForm),
            "rebuilding the header must not disturb the content region"
        );
    }

    #[test]
    fn test_transitions_are_idempotent() {
        let mut modal = modal();
        modal.show_default_header();

        modal.show_import();
        modal.show_import();
        assert_eq!(modal.content.occupant_kind(), Some(ViewKind::ImportForm));
        assert!(modal.menu.is_empty());
        assert_eq!(modal.screen(), Screen::Import);
    }

    #[test]
    fn test_filter_registry_reaches_row_resolution() {
        let mut filters = FilterRegistry::new();
        filters.register(crate::library::filters::FilterHook::TemplateAction, |_, _| {
            ActionButton::Insert
        });
        let modal = LibraryModal::new(Rc::new(filters));

        let gated = create_test_template("gated", TemplateKind::Block, 2);
        assert_eq!(modal.resolve_button(&gated), ActionButton::Insert);
    }
}
