//! Content blocks - the unit a page is assembled from
//!
//! Templates carry blocks as their payload; inserting a template copies its
//! blocks into the working page. Block text may contain `{{placeholder}}`
//! tokens that are substituted from the page settings at insert time.

use crate::model::placeholder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The closed set of block kinds a catalog may describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Hero,
    Features,
    Gallery,
    Pricing,
    Faq,
    Cta,
    Contact,
    Footer,
    Text,
}

impl BlockKind {
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Hero => "Hero",
            BlockKind::Features => "Features",
            BlockKind::Gallery => "Gallery",
            BlockKind::Pricing => "Pricing",
            BlockKind::Faq => "FAQ",
            BlockKind::Cta => "Call to Action",
            BlockKind::Contact => "Contact",
            BlockKind::Footer => "Footer",
            BlockKind::Text => "Text",
        }
    }

    /// Single-glyph marker used in list rendering
    pub fn icon(&self) -> &'static str {
        match self {
            BlockKind::Hero => "▛",
            BlockKind::Features => "☰",
            BlockKind::Gallery => "▦",
            BlockKind::Pricing => "$",
            BlockKind::Faq => "?",
            BlockKind::Cta => "➤",
            BlockKind::Contact => "✉",
            BlockKind::Footer => "▁",
            BlockKind::Text => "¶",
        }
    }

    /// Parse a kind from its snake_case catalog name
    pub fn parse(s: &str) -> Option<BlockKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" => Some(BlockKind::Hero),
            "features" => Some(BlockKind::Features),
            "gallery" => Some(BlockKind::Gallery),
            "pricing" => Some(BlockKind::Pricing),
            "faq" => Some(BlockKind::Faq),
            "cta" => Some(BlockKind::Cta),
            "contact" => Some(BlockKind::Contact),
            "footer" => Some(BlockKind::Footer),
            "text" => Some(BlockKind::Text),
            _ => None,
        }
    }
}

/// A single content block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,

    /// Optional display heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Optional body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            heading: None,
            body: None,
        }
    }

    /// Label shown in the editor block list: the heading when present,
    /// otherwise the kind name
    pub fn label(&self) -> &str {
        self.heading.as_deref().unwrap_or_else(|| self.kind.name())
    }

    /// Copy of this block with `{{placeholder}}` tokens substituted from
    /// the given settings
    pub fn resolved(&self, settings: &BTreeMap<String, String>) -> Block {
        Block {
            kind: self.kind,
            heading: self
                .heading
                .as_deref()
                .map(|h| placeholder::substitute(h, settings)),
            body: self
                .body
                .as_deref()
                .map(|b| placeholder::substitute(b, settings)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_label_prefers_heading() {
        let mut block = Block::new(BlockKind::Hero);
        assert_eq!(block.label(), "Hero");

        block.heading = Some("Welcome".to_string());
        assert_eq!(block.label(), "Welcome");
    }

    #[test]
    fn test_block_kind_serde_snake_case() {
        let json = r#"{"kind":"cta","heading":"Buy now"}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.kind, BlockKind::Cta);
        assert_eq!(block.heading.as_deref(), Some("Buy now"));
        assert!(block.body.is_none());
    }

    #[test]
    fn test_block_kind_parse() {
        assert_eq!(BlockKind::parse("hero"), Some(BlockKind::Hero));
        assert_eq!(BlockKind::parse(" CTA "), Some(BlockKind::Cta));
        assert_eq!(BlockKind::parse("sidebar"), None);
    }

    #[test]
    fn test_block_resolved_substitutes_placeholders() {
        let mut settings = BTreeMap::new();
        settings.insert("site_name".to_string(), "Acme".to_string());

        let block = Block {
            kind: BlockKind::Hero,
            heading: Some("Welcome to {{site_name}}".to_string()),
            body: Some("{{ site_name }} builds things.".to_string()),
        };

        let resolved = block.resolved(&settings);
        assert_eq!(resolved.heading.as_deref(), Some("Welcome to Acme"));
        assert_eq!(resolved.body.as_deref(), Some("Acme builds things."));
    }
}
