//! Domain state - business/data state separate from UI concerns

use super::document::Page;
use super::history::InsertHistoryEntry;
use super::template::Catalog;
use std::path::PathBuf;

/// Domain state containing all business data
#[derive(Debug, Default)]
pub struct DomainState {
    /// Merged template catalog (bundled + configured sources + local store)
    pub catalog: Catalog,

    /// The page being built
    pub page: Page,

    /// Where the page is persisted
    pub page_path: PathBuf,

    /// Whether the page has unsaved edits
    pub page_dirty: bool,

    /// Insert history entries, newest first
    pub insert_history: Vec<InsertHistoryEntry>,
}

impl DomainState {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            page: Page::default(),
            page_path: PathBuf::from("page.yml"),
            page_dirty: false,
            insert_history: Vec::new(),
        }
    }
}
