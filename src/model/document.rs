//! The working page - the document the editor mutates
//!
//! A page is an ordered list of blocks plus the settings map that feeds
//! placeholder substitution. Persisted as YAML (see `services::page`).

use crate::model::block::Block;
use crate::model::template::Template;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_title() -> String {
    "Untitled Page".to_string()
}

/// The page being built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default = "default_title")]
    pub title: String,

    /// Placeholder values available to inserted templates
    #[serde(default)]
    pub settings: BTreeMap<String, String>,

    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Default for Page {
    fn default() -> Self {
        let mut settings = BTreeMap::new();
        settings.insert("site_name".to_string(), "My Site".to_string());
        settings.insert("tagline".to_string(), "Built with pagecraft".to_string());
        Self {
            title: default_title(),
            settings,
            blocks: Vec::new(),
        }
    }
}

impl Page {
    /// Append a template's blocks, substituting placeholders from the page
    /// settings. Returns how many blocks were added.
    pub fn insert_template(&mut self, template: &Template) -> usize {
        let added = template.content.len();
        self.blocks
            .extend(template.content.iter().map(|b| b.resolved(&self.settings)));
        added
    }

    /// Swap the block at `index` with the one above it
    pub fn move_block_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.blocks.len() {
            return false;
        }
        self.blocks.swap(index, index - 1);
        true
    }

    /// Swap the block at `index` with the one below it
    pub fn move_block_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.blocks.len() {
            return false;
        }
        self.blocks.swap(index, index + 1);
        true
    }

    pub fn remove_block(&mut self, index: usize) -> Option<Block> {
        if index < self.blocks.len() {
            Some(self.blocks.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::block::BlockKind;
    use crate::model::template::{Template, TemplateKind};

    fn hero_template() -> Template {
        Template {
            id: "hero".to_string(),
            title: "Hero".to_string(),
            kind: TemplateKind::Block,
            access_level: 0,
            author: None,
            url: None,
            tags: vec![],
            created_at: None,
            content: vec![Block {
                kind: BlockKind::Hero,
                heading: Some("Welcome to {{site_name}}".to_string()),
                body: None,
            }],
        }
    }

    #[test]
    fn test_insert_template_substitutes_settings() {
        let mut page = Page::default();
        let added = page.insert_template(&hero_template());

        assert_eq!(added, 1);
        assert_eq!(
            page.blocks[0].heading.as_deref(),
            Some("Welcome to My Site")
        );
    }

    #[test]
    fn test_move_block_bounds() {
        let mut page = Page::default();
        page.blocks = vec![Block::new(BlockKind::Hero), Block::new(BlockKind::Footer)];

        assert!(!page.move_block_up(0));
        assert!(page.move_block_down(0));
        assert_eq!(page.blocks[0].kind, BlockKind::Footer);
        assert!(!page.move_block_down(1));
        assert!(page.move_block_up(1));
        assert_eq!(page.blocks[0].kind, BlockKind::Hero);
    }

    #[test]
    fn test_remove_block() {
        let mut page = Page::default();
        page.blocks = vec![Block::new(BlockKind::Text)];

        assert!(page.remove_block(5).is_none());
        let removed = page.remove_block(0).unwrap();
        assert_eq!(removed.kind, BlockKind::Text);
        assert!(page.blocks.is_empty());
    }

    #[test]
    fn test_page_yaml_round_trip() {
        let mut page = Page::default();
        page.title = "Landing".to_string();
        page.blocks.push(Block {
            kind: BlockKind::Cta,
            heading: Some("Go".to_string()),
            body: None,
        });

        let yaml = serde_yaml::to_string(&page).unwrap();
        let parsed: Page = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, page);
    }
}
