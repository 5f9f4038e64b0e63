//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.
//! The header and content components also implement `LibraryView` so the
//! library modal can mount them into its regions.

pub mod connect_form;
pub mod editor;
pub mod header_actions;
pub mod header_back;
pub mod header_logo;
pub mod header_menu;
pub mod header_preview;
pub mod import_form;
pub mod layout;
pub mod preview_frame;
pub mod save_template_form;
pub mod splash;
pub mod template_list;

pub use connect_form::ConnectForm;
pub use editor::{draw_editor_screen, EditorComponent, EditorRenderContext};
pub use header_actions::ActionsView;
pub use header_back::BackView;
pub use header_logo::LogoView;
pub use header_menu::MenuView;
pub use header_preview::PreviewHeaderView;
pub use import_form::ImportForm;
pub use layout::{centered_popup, editor_layout, modal_layout};
pub use preview_frame::PreviewFrame;
pub use save_template_form::SaveTemplateForm;
pub use splash::SplashComponent;
pub use template_list::{TemplateListView, TemplateRow};
