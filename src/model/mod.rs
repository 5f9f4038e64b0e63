//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - Business/data state (catalog, page, history)
//! - `Template`/`Block` - catalog and page content models
//! - `Page` - the working document

pub mod block;
pub mod document;
pub mod domain;
pub mod history;
pub mod placeholder;
pub mod template;
pub mod ui;

// Re-export commonly used types
pub use block::{Block, BlockKind};
pub use document::Page;
pub use domain::DomainState;
pub use history::{InsertHistory, InsertHistoryEntry};
pub use template::{Catalog, Category, Template, TemplateCollection, TemplateKind};
pub use ui::AppMode;
