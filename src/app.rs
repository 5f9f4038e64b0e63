//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. It owns
//! the page, the catalog and the library modal; every state change arrives
//! here as an Action.

use crate::action::Action;
use crate::component::Component;
use crate::components::{draw_editor_screen, EditorComponent, EditorRenderContext, SplashComponent};
use crate::config::{Config, License};
use crate::library::{ActionButton, FilterHook, FilterRegistry, LibraryModal};
use crate::model::history::{InsertHistory, InsertHistoryEntry};
use crate::model::ui::AppMode;
use crate::model::{Category, DomainState, TemplateKind};
use crate::services;
use anyhow::Result;
use chrono::Local;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::path::{Path, PathBuf};
use std::rc::Rc;

// ═══════════════════════════════════════════════════════════════════════════════
// Filter Registry
// ═══════════════════════════════════════════════════════════════════════════════

/// Build the action-button filter chain for the given license tier
///
/// The base resolution turns access levels into upsell buttons; the license
/// filter registered here downgrades those back to Insert for every template
/// the active license covers. Third-party policies would register further
/// filters on the same hook.
fn build_filter_registry(license_tier: u8) -> FilterRegistry {
    let mut filters = FilterRegistry::new();

    if license_tier > 0 {
        filters.register(FilterHook::TemplateAction, move |button, template| {
            if button.is_upsell() && template.access_level <= license_tier {
                ActionButton::Insert
            } else {
                button
            }
        });
    }

    filters
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Domain state (business data)
    pub domain: DomainState,

    /// The template library, present while open
    pub library: Option<LibraryModal>,

    /// Action-button policy chain, shared with the open modal
    filters: Rc<FilterRegistry>,

    /// Category the browse screen shows
    pub active_category: Category,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub editor: EditorComponent,

    /// Current config (license, page path, catalog sources)
    pub config: Config,

    /// App data directory holding the insert history
    data_dir: Option<PathBuf>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance from the on-disk environment
    pub fn new() -> App {
        let config = Config::load().unwrap_or_default();
        let mut app = App::with_env(config, Config::config_dir());

        app.domain.page_path = PathBuf::from(&app.config.page_path);
        match services::page::load_page(&app.domain.page_path) {
            Ok(page) => app.domain.page = page,
            Err(e) => app.error = Some(e),
        }

        app.reload_catalog();
        if let Some(dir) = app.data_dir.as_deref() {
            app.domain.insert_history = InsertHistory::load_in(dir);
        }
        app
    }

    /// Assemble the app around an explicit config and data directory.
    /// Touches no files; `new` layers the on-disk state on top.
    fn with_env(config: Config, data_dir: Option<PathBuf>) -> App {
        let filters = Rc::new(build_filter_registry(config.license_tier()));
        App {
            mode: AppMode::Splash,
            domain: DomainState::new(),
            library: None,
            filters,
            active_category: Category::Blocks,
            should_quit: false,
            error: None,
            status_message: None,
            splash: SplashComponent::new(),
            editor: EditorComponent::new(),
            config,
            data_dir,
        }
    }

    /// Reload the catalog from its sources plus the local store
    fn reload_catalog(&mut self) {
        let (mut catalog, warnings) = services::catalog::load_catalog(&self.config.catalog_sources);
        catalog.saved = services::store::list_templates();
        self.domain.catalog = catalog;

        if let Some(warning) = warnings.into_iter().next() {
            self.error = Some(warning);
        }
    }

    /// Open the library on the browse screen for the active category
    fn open_library(&mut self) {
        self.error = None;
        self.status_message = None;

        let mut modal = LibraryModal::new(Rc::clone(&self.filters));
        modal.show_default_header();
        modal.show_templates(self.domain.catalog.collection(self.active_category));
        self.library = Some(modal);
    }

    /// Return the open modal to the browse screen showing `category`
    fn show_category(&mut self, category: Category) {
        self.error = None;
        self.active_category = category;

        if let Some(modal) = self.library.as_mut() {
            modal.show_default_header();
            modal.show_templates(self.domain.catalog.collection(category));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Library Operations
    // ─────────────────────────────────────────────────────────────────────────

    fn insert_template(&mut self, id: &str) {
        let Some(template) = self.domain.catalog.find(id).cloned() else {
            self.error = Some(format!("Template \"{}\" is no longer in the catalog", id));
            return;
        };

        let added = self.domain.page.insert_template(&template);
        self.domain.page_dirty = true;
        self.editor.clamp_selection(self.domain.page.blocks.len());

        InsertHistory::record(
            &mut self.domain.insert_history,
            InsertHistoryEntry {
                timestamp: Local::now(),
                template_id: template.id.clone(),
                title: template.title.clone(),
                blocks_added: added,
            },
        );
        if let Some(dir) = self.data_dir.as_deref() {
            let _ = InsertHistory::save_in(dir, &self.domain.insert_history);
        }

        // Inserting hands control back to the editor
        self.library = None;
        self.status_message = Some(format!("Inserted \"{}\" (+{} blocks)", template.title, added));
    }

    fn import_template(&mut self, path: &str) {
        match services::store::import_template(Path::new(path)) {
            Ok(template) => {
                self.domain.catalog.saved = services::store::list_templates();
                self.status_message = Some(format!("Imported \"{}\"", template.title));
                self.show_category(Category::Saved);
            }
            Err(e) => self.error = Some(e),
        }
    }

    fn save_template(&mut self, name: &str, kind: TemplateKind) {
        match services::store::save_template(name, kind, &self.domain.page) {
            Ok(template) => {
                self.domain.catalog.saved = services::store::list_templates();
                self.status_message = Some(format!("Saved \"{}\"", template.title));
                self.show_category(Category::Saved);
            }
            Err(e) => self.error = Some(e),
        }
    }

    fn connect_license(&mut self, key: &str) {
        match License::parse(key) {
            Ok(license) => {
                let plan = license.tier_name();
                self.config.license = Some(license);
                if let Err(e) = self.config.save() {
                    self.error = Some(format!("License active but not persisted: {}", e));
                }

                // Buttons are resolved at mount time, so rebuild the chain and
                // remount the browse screen
                self.filters = Rc::new(build_filter_registry(self.config.license_tier()));
                self.status_message = Some(format!("Connected, {} templates unlocked", plan));
                self.open_library();
            }
            Err(e) => self.error = Some(e),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Page Operations
    // ─────────────────────────────────────────────────────────────────────────

    fn save_page(&mut self) {
        match services::page::save_page(&self.domain.page_path, &self.domain.page) {
            Ok(()) => {
                self.domain.page_dirty = false;
                self.status_message =
                    Some(format!("Page written to {}", self.domain.page_path.display()));
            }
            Err(e) => self.error = Some(e),
        }
    }

    fn delete_block(&mut self) {
        if let Some(block) = self.domain.page.remove_block(self.editor.selected) {
            self.domain.page_dirty = true;
            self.editor.clamp_selection(self.domain.page.blocks.len());
            self.status_message = Some(format!("Removed {}", block.label()));
        }
    }

    fn render_overlay_status(&self, frame: &mut Frame, area: Rect) {
        let Some((text, color)) = self
            .error
            .as_deref()
            .map(|e| (format!(" ✗ {}", e), Color::Red))
            .or_else(|| {
                self.status_message
                    .as_deref()
                    .map(|m| (format!(" ✓ {}", m), Color::Green))
            })
        else {
            return;
        };

        if area.height == 0 {
            return;
        }
        let bar = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        frame.render_widget(Clear, bar);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color)))),
            bar,
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Editor => {
                // The open library captures all input; its content view owns
                // the keys, including Esc
                if let Some(modal) = self.library.as_mut() {
                    modal.handle_key_event(key)
                } else {
                    self.editor.handle_key_event(key)
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Editor;
            }
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Page Editing
            // ─────────────────────────────────────────────────────────────────
            Action::NextBlock => self.editor.select_next(self.domain.page.blocks.len()),
            Action::PrevBlock => self.editor.select_prev(),
            Action::MoveBlockUp => {
                if self.domain.page.move_block_up(self.editor.selected) {
                    self.editor.selected -= 1;
                    self.domain.page_dirty = true;
                }
            }
            Action::MoveBlockDown => {
                if self.domain.page.move_block_down(self.editor.selected) {
                    self.editor.selected += 1;
                    self.domain.page_dirty = true;
                }
            }
            Action::DeleteBlock => self.delete_block(),
            Action::SavePage => self.save_page(),

            // ─────────────────────────────────────────────────────────────────
            // Library Screens
            // ─────────────────────────────────────────────────────────────────
            Action::OpenLibrary => self.open_library(),
            Action::CloseLibrary => {
                self.library = None;
            }
            Action::ShowBrowse => self.show_category(self.active_category),
            Action::SwitchCategory(category) => self.show_category(category),
            Action::ShowImport => {
                if let Some(modal) = self.library.as_mut() {
                    modal.show_import();
                }
            }
            Action::ShowConnect(args) => {
                if let Some(modal) = self.library.as_mut() {
                    modal.show_connect(args);
                }
            }
            Action::ShowSaveTemplate => {
                let page = self.domain.page.clone();
                if let Some(modal) = self.library.as_mut() {
                    modal.show_save_template(page);
                }
            }
            Action::ShowPreview(id) => match self.domain.catalog.find(&id).cloned() {
                Some(template) => {
                    if let Some(modal) = self.library.as_mut() {
                        modal.show_preview(template);
                    }
                }
                None => {
                    self.error = Some(format!("Template \"{}\" is no longer in the catalog", id))
                }
            },

            // ─────────────────────────────────────────────────────────────────
            // Library Operations
            // ─────────────────────────────────────────────────────────────────
            Action::RefreshCatalog => {
                self.reload_catalog();
                self.show_category(self.active_category);
                self.status_message = Some("Catalog refreshed".to_string());
            }
            Action::InsertTemplate(id) => self.insert_template(&id),
            Action::ImportTemplate(path) => self.import_template(&path),
            Action::SaveTemplate { name, kind } => self.save_template(&name, kind),
            Action::ConnectLicense(key) => self.connect_license(&key),
            Action::OpenUrl(url) => {
                self.status_message = Some(format!("Demo page: {}", url));
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Editor => {
                let ctx = EditorRenderContext {
                    page: &self.domain.page,
                    page_path: &self.domain.page_path,
                    page_dirty: self.domain.page_dirty,
                    insert_history: &self.domain.insert_history,
                    error: self.error.as_deref(),
                    status_message: self.status_message.as_deref(),
                };
                draw_editor_screen(frame, area, &mut self.editor, &ctx)?;

                if let Some(modal) = self.library.as_mut() {
                    modal.draw(frame, area)?;
                    // The modal covers the editor's status bar, so repeat
                    // errors and confirmations on the bottom screen row
                    self.render_overlay_status(frame, area);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{Screen, ViewKind};
    use crate::model::template::tests::create_test_template;
    use crate::model::{Block, BlockKind, Catalog};
    use std::fs;

    /// Hand-built catalog standing in for the bundled and configured sources
    fn fixture_catalog() -> Catalog {
        let mut hero = create_test_template("hero-basic", TemplateKind::Block, 0);
        hero.content = vec![Block {
            kind: BlockKind::Hero,
            heading: Some("Welcome to {{site_name}}".to_string()),
            body: None,
        }];

        let mut launch = create_test_template("landing-launch", TemplateKind::Page, 0);
        launch.content = vec![
            Block::new(BlockKind::Hero),
            Block::new(BlockKind::Features),
            Block::new(BlockKind::Cta),
        ];

        Catalog {
            templates: vec![
                hero,
                launch,
                create_test_template("saas-complete", TemplateKind::Page, 2),
            ],
            saved: Vec::new(),
        }
    }

    /// App on the editor screen, wired to fixture data and a scratch data
    /// directory instead of the real environment
    fn editor_app(tag: &str) -> App {
        let data_dir = std::env::temp_dir().join(format!("pagecraft_app_{}", tag));
        fs::remove_dir_all(&data_dir).ok();

        let mut app = App::with_env(Config::default(), Some(data_dir));
        app.domain.catalog = fixture_catalog();
        app.mode = AppMode::Editor;
        app
    }

    #[test]
    fn test_open_library_lands_on_browse() {
        let mut app = editor_app("browse");
        app.update(Action::OpenLibrary).unwrap();

        let modal = app.library.as_ref().unwrap();
        assert_eq!(modal.screen(), Screen::Browse);
        assert_eq!(modal.content.occupant_kind(), Some(ViewKind::TemplateList));
        assert_eq!(modal.menu.occupant_kind(), Some(ViewKind::HeaderMenu));
        assert_eq!(modal.tools.occupant_kind(), Some(ViewKind::HeaderActions));
        assert_eq!(modal.logo.occupant_kind(), Some(ViewKind::HeaderLogo));
    }

    #[test]
    fn test_insert_template_updates_page_and_history() {
        let mut app = editor_app("insert");
        app.update(Action::OpenLibrary).unwrap();

        app.update(Action::InsertTemplate("hero-basic".to_string()))
            .unwrap();

        assert_eq!(app.domain.page.blocks.len(), 1);
        assert!(app.domain.page_dirty);
        assert_eq!(app.domain.insert_history.len(), 1);
        assert_eq!(app.domain.insert_history[0].template_id, "hero-basic");
        assert!(app.library.is_none(), "insert returns to the editor");
        assert!(app.status_message.is_some());

        fs::remove_dir_all(app.data_dir.as_deref().unwrap()).ok();
    }

    #[test]
    fn test_insert_history_lands_in_data_dir() {
        let mut app = editor_app("history_file");
        app.update(Action::InsertTemplate("hero-basic".to_string()))
            .unwrap();

        let dir = app.data_dir.clone().unwrap();
        let contents = fs::read_to_string(dir.join("history.json")).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert!(contents.contains("hero-basic"));
    }

    #[test]
    fn test_insert_resolves_placeholders_from_settings() {
        let mut app = editor_app("placeholders");
        app.domain
            .page
            .settings
            .insert("site_name".to_string(), "Acme".to_string());

        app.update(Action::InsertTemplate("hero-basic".to_string()))
            .unwrap();

        let hero = app.domain.page.blocks.last().unwrap();
        assert_eq!(hero.heading.as_deref(), Some("Welcome to Acme"));

        fs::remove_dir_all(app.data_dir.as_deref().unwrap()).ok();
    }

    #[test]
    fn test_unknown_template_id_is_an_error() {
        let mut app = editor_app("unknown_id");
        let blocks_before = app.domain.page.blocks.len();

        app.update(Action::InsertTemplate("not-a-template".to_string()))
            .unwrap();

        assert!(app.error.is_some());
        assert_eq!(app.domain.page.blocks.len(), blocks_before);
    }

    #[test]
    fn test_screen_transitions_route_to_modal() {
        let mut app = editor_app("transitions");
        app.update(Action::OpenLibrary).unwrap();

        app.update(Action::ShowSaveTemplate).unwrap();
        {
            let modal = app.library.as_ref().unwrap();
            assert_eq!(modal.screen(), Screen::SaveTemplate);
            assert!(modal.menu.is_empty());
        }

        app.update(Action::ShowBrowse).unwrap();
        {
            let modal = app.library.as_ref().unwrap();
            assert_eq!(modal.screen(), Screen::Browse);
            assert!(!modal.menu.is_empty());
            assert_eq!(modal.content.occupant_kind(), Some(ViewKind::TemplateList));
        }
    }

    #[test]
    fn test_license_tier_unlocks_gated_buttons() {
        let mut app = editor_app("license");
        app.filters = Rc::new(build_filter_registry(2));
        app.update(Action::OpenLibrary).unwrap();

        let modal = app.library.as_ref().unwrap();
        let gated = app.domain.catalog.find("saas-complete").unwrap();
        assert_eq!(modal.resolve_button(gated), ActionButton::Insert);

        // Tier 1 is not enough for an expert template
        let pro_filters = build_filter_registry(1);
        assert_eq!(
            crate::library::resolve_action_button(&pro_filters, gated),
            ActionButton::GoExpert
        );
    }

    #[test]
    fn test_switch_category_rebuilds_browse() {
        let mut app = editor_app("switch");
        app.update(Action::OpenLibrary).unwrap();
        app.update(Action::SwitchCategory(Category::Pages)).unwrap();

        assert_eq!(app.active_category, Category::Pages);
        let modal = app.library.as_ref().unwrap();
        assert_eq!(modal.screen(), Screen::Browse);
        assert_eq!(modal.content.occupant_kind(), Some(ViewKind::TemplateList));
    }

    #[test]
    fn test_block_reordering_tracks_selection() {
        let mut app = editor_app("reorder");
        app.update(Action::InsertTemplate("landing-launch".to_string()))
            .unwrap();
        assert_eq!(app.domain.page.blocks.len(), 3);

        let first = app.domain.page.blocks[0].kind;
        app.editor.selected = 0;
        app.update(Action::MoveBlockDown).unwrap();

        assert_eq!(app.domain.page.blocks[1].kind, first);
        assert_eq!(app.editor.selected, 1);

        app.update(Action::MoveBlockUp).unwrap();
        assert_eq!(app.domain.page.blocks[0].kind, first);
        assert_eq!(app.editor.selected, 0);

        fs::remove_dir_all(app.data_dir.as_deref().unwrap()).ok();
    }

    #[test]
    fn test_open_url_surfaces_the_link() {
        let mut app = editor_app("open_url");
        app.update(Action::OpenUrl("https://example.com/demo".to_string()))
            .unwrap();

        let status = app.status_message.unwrap();
        assert!(status.contains("https://example.com/demo"));
    }
}
