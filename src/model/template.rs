//! Template metadata and the in-memory catalog
//!
//! A template is a reusable bundle of blocks plus catalog metadata. The
//! numeric `access_level` is read-only input from the catalog source; it
//! drives which action button the library resolves for the row (see
//! `library::buttons`).

use crate::model::block::Block;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// What a template produces when inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// A single section meant to be dropped into an existing page
    Block,
    /// A full page layout
    Page,
}

impl TemplateKind {
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Block => "Block",
            TemplateKind::Page => "Page",
        }
    }
}

/// Library menu categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Blocks,
    Pages,
    Saved,
}

impl Category {
    pub fn all() -> [Category; 3] {
        [Category::Blocks, Category::Pages, Category::Saved]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Blocks => "Blocks",
            Category::Pages => "Pages",
            Category::Saved => "My Templates",
        }
    }

    /// Number key that jumps to this category from the browse screen
    pub fn shortcut(&self) -> char {
        match self {
            Category::Blocks => '1',
            Category::Pages => '2',
            Category::Saved => '3',
        }
    }
}

/// A single catalog template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub kind: TemplateKind,

    /// Tier classification from the catalog source: 0 free, 1 pro, 2 expert.
    /// Values outside the known set resolve as tier 0.
    #[serde(default)]
    pub access_level: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Where a rendered preview of this template lives, if anywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Local>>,

    /// Block payload; empty for listing-only entries (e.g. CSV sources)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Block>,
}

impl Template {
    /// Badge text for gated tiers; `None` for freely insertable templates
    pub fn tier_badge(&self) -> Option<&'static str> {
        match self.access_level {
            1 => Some("PRO"),
            2 => Some("EXPERT"),
            _ => None,
        }
    }

    pub fn block_count(&self) -> usize {
        self.content.len()
    }

    /// Case-insensitive substring match over title, tags and author
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
            || self
                .author
                .as_deref()
                .is_some_and(|a| a.to_lowercase().contains(&query))
    }
}

/// The value bound into a template-list view: one category's templates,
/// snapshotted at transition time
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateCollection {
    pub category: Category,
    pub templates: Vec<Template>,
}

impl TemplateCollection {
    pub fn new(category: Category, templates: Vec<Template>) -> Self {
        Self {
            category,
            templates,
        }
    }
}

/// Everything the library can offer: catalog templates plus the user's
/// locally saved ones
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Templates from bundled and configured sources
    pub templates: Vec<Template>,
    /// Templates from the local store (the Saved category)
    pub saved: Vec<Template>,
}

impl Catalog {
    /// Build the collection for a library category
    pub fn collection(&self, category: Category) -> TemplateCollection {
        let templates = match category {
            Category::Blocks => self
                .templates
                .iter()
                .filter(|t| t.kind == TemplateKind::Block)
                .cloned()
                .collect(),
            Category::Pages => self
                .templates
                .iter()
                .filter(|t| t.kind == TemplateKind::Page)
                .cloned()
                .collect(),
            Category::Saved => self.saved.clone(),
        };
        TemplateCollection::new(category, templates)
    }

    /// Look a template up by id across catalog and saved entries
    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates
            .iter()
            .chain(self.saved.iter())
            .find(|t| t.id == id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::block::BlockKind;

    /// Helper to create a test Template
    pub(crate) fn create_test_template(id: &str, kind: TemplateKind, level: u8) -> Template {
        Template {
            id: id.to_string(),
            title: format!("Template {}", id),
            kind,
            access_level: level,
            author: Some("studio".to_string()),
            url: None,
            tags: vec!["landing".to_string()],
            created_at: None,
            content: vec![Block::new(BlockKind::Hero)],
        }
    }

    #[test]
    fn test_template_parses_with_defaults() {
        let json = r#"{"id":"hero-basic","title":"Basic Hero","kind":"block"}"#;
        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.access_level, 0);
        assert!(template.content.is_empty());
        assert!(template.url.is_none());
    }

    #[test]
    fn test_tier_badge() {
        assert_eq!(
            create_test_template("a", TemplateKind::Block, 0).tier_badge(),
            None
        );
        assert_eq!(
            create_test_template("b", TemplateKind::Block, 1).tier_badge(),
            Some("PRO")
        );
        assert_eq!(
            create_test_template("c", TemplateKind::Block, 2).tier_badge(),
            Some("EXPERT")
        );
        assert_eq!(
            create_test_template("d", TemplateKind::Block, 7).tier_badge(),
            None
        );
    }

    #[test]
    fn test_matches_query_checks_title_tags_author() {
        let template = create_test_template("hero", TemplateKind::Block, 0);
        assert!(template.matches_query(""));
        assert!(template.matches_query("HERO"));
        assert!(template.matches_query("landing"));
        assert!(template.matches_query("studio"));
        assert!(!template.matches_query("pricing"));
    }

    #[test]
    fn test_catalog_collection_filters_by_kind() {
        let catalog = Catalog {
            templates: vec![
                create_test_template("a", TemplateKind::Block, 0),
                create_test_template("b", TemplateKind::Page, 0),
                create_test_template("c", TemplateKind::Block, 1),
            ],
            saved: vec![create_test_template("mine", TemplateKind::Page, 0)],
        };

        let blocks = catalog.collection(Category::Blocks);
        assert_eq!(blocks.templates.len(), 2);
        assert!(blocks.templates.iter().all(|t| t.kind == TemplateKind::Block));

        let pages = catalog.collection(Category::Pages);
        assert_eq!(pages.templates.len(), 1);

        let saved = catalog.collection(Category::Saved);
        assert_eq!(saved.templates[0].id, "mine");
    }

    #[test]
    fn test_catalog_find_searches_saved_too() {
        let catalog = Catalog {
            templates: vec![create_test_template("a", TemplateKind::Block, 0)],
            saved: vec![create_test_template("mine", TemplateKind::Page, 0)],
        };
        assert!(catalog.find("a").is_some());
        assert!(catalog.find("mine").is_some());
        assert!(catalog.find("nope").is_none());
    }
}
