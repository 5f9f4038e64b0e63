//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::library::ConnectArgs;
use crate::model::{Category, TemplateKind};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Page Editing
    // ─────────────────────────────────────────────────────────────────────────
    /// Select the next block on the page
    NextBlock,
    /// Select the previous block on the page
    PrevBlock,
    /// Move the selected block one position up
    MoveBlockUp,
    /// Move the selected block one position down
    MoveBlockDown,
    /// Remove the selected block from the page
    DeleteBlock,
    /// Write the page to disk
    SavePage,

    // ─────────────────────────────────────────────────────────────────────────
    // Library Screens
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the template library on the browse screen
    OpenLibrary,
    /// Close the library and return to the editor
    CloseLibrary,
    /// Return to the browse screen from any library screen
    ShowBrowse,
    /// Show a different template category on the browse screen
    SwitchCategory(Category),
    /// Show the import screen
    ShowImport,
    /// Show the license connect screen
    ShowConnect(ConnectArgs),
    /// Show the save-template screen over the current page
    ShowSaveTemplate,
    /// Show the preview screen for a template id
    ShowPreview(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Library Operations
    // ─────────────────────────────────────────────────────────────────────────
    /// Reload the catalog from its sources
    RefreshCatalog,
    /// Insert a template's blocks into the page
    InsertTemplate(String),
    /// Import a template file from the given path
    ImportTemplate(String),
    /// Persist the current page as a reusable template
    SaveTemplate { name: String, kind: TemplateKind },
    /// Validate and store a license key
    ConnectLicense(String),
    /// Surface a template's demo URL in the status bar
    OpenUrl(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextBlock => write!(f, "NextBlock"),
            Action::PrevBlock => write!(f, "PrevBlock"),
            Action::MoveBlockUp => write!(f, "MoveBlockUp"),
            Action::MoveBlockDown => write!(f, "MoveBlockDown"),
            Action::DeleteBlock => write!(f, "DeleteBlock"),
            Action::SavePage => write!(f, "SavePage"),
            Action::OpenLibrary => write!(f, "OpenLibrary"),
            Action::CloseLibrary => write!(f, "CloseLibrary"),
            Action::ShowBrowse => write!(f, "ShowBrowse"),
            Action::SwitchCategory(category) => write!(f, "SwitchCategory({})", category.name()),
            Action::ShowImport => write!(f, "ShowImport"),
            Action::ShowConnect(_) => write!(f, "ShowConnect"),
            Action::ShowSaveTemplate => write!(f, "ShowSaveTemplate"),
            Action::ShowPreview(id) => write!(f, "ShowPreview({})", id),
            Action::RefreshCatalog => write!(f, "RefreshCatalog"),
            Action::InsertTemplate(id) => write!(f, "InsertTemplate({})", id),
            Action::ImportTemplate(path) => write!(f, "ImportTemplate({})", path),
            Action::SaveTemplate { name, .. } => write!(f, "SaveTemplate({})", name),
            Action::ConnectLicense(_) => write!(f, "ConnectLicense"),
            Action::OpenUrl(url) => write!(f, "OpenUrl({})", url),
        }
    }
}
