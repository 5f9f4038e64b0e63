//! Action-button resolution for template rows
//!
//! Each template row carries one call-to-action, picked from the template's
//! access level. Unknown levels resolve to the base insert variant rather
//! than inheriting the source ambiguity. The computed variant is then offered
//! to the filter chain, which may override it (e.g. a connected license
//! downgrades an upsell back to a plain insert).

use crate::library::filters::{FilterHook, FilterRegistry};
use crate::model::Template;

/// The three call-to-action variants a template row can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionButton {
    /// Direct insert; the base variant supplies its own label
    Insert,
    /// Upsell to the Pro tier
    GoPro,
    /// Upsell to the Expert tier
    GoExpert,
}

impl ActionButton {
    /// Base variant for a raw access level. Levels outside {0, 1, 2} fall
    /// back to the level-0 insert variant.
    pub fn base_for_level(level: u8) -> Self {
        match level {
            1 => ActionButton::GoPro,
            2 => ActionButton::GoExpert,
            _ => ActionButton::Insert,
        }
    }

    /// Label override for upsell variants; `None` means the base variant's
    /// own label applies
    pub fn label_override(&self) -> Option<&'static str> {
        match self {
            ActionButton::Insert => None,
            ActionButton::GoPro => Some("Go Pro"),
            ActionButton::GoExpert => Some("Go Expert"),
        }
    }

    /// Text actually rendered on the button
    pub fn label(&self) -> &'static str {
        self.label_override().unwrap_or("Insert")
    }

    pub fn is_upsell(&self) -> bool {
        !matches!(self, ActionButton::Insert)
    }
}

/// Resolve the button for a template: base variant from the access level,
/// then whatever the filter chain returns, unchanged.
pub fn resolve_action_button(filters: &FilterRegistry, template: &Template) -> ActionButton {
    let base = ActionButton::base_for_level(template.access_level);
    filters.apply(FilterHook::TemplateAction, base, template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::template::tests::create_test_template;
    use crate::model::TemplateKind;

    #[test]
    fn test_base_variant_per_level() {
        assert_eq!(ActionButton::base_for_level(0), ActionButton::Insert);
        assert_eq!(ActionButton::base_for_level(1), ActionButton::GoPro);
        assert_eq!(ActionButton::base_for_level(2), ActionButton::GoExpert);
    }

    #[test]
    fn test_unknown_levels_fall_back_to_insert() {
        assert_eq!(ActionButton::base_for_level(3), ActionButton::Insert);
        assert_eq!(ActionButton::base_for_level(255), ActionButton::Insert);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ActionButton::Insert.label_override(), None);
        assert_eq!(ActionButton::Insert.label(), "Insert");
        assert_eq!(ActionButton::GoPro.label(), "Go Pro");
        assert_eq!(ActionButton::GoExpert.label(), "Go Expert");
    }

    #[test]
    fn test_resolve_with_empty_chain_uses_base() {
        let filters = FilterRegistry::new();
        let template = create_test_template("t", TemplateKind::Block, 1);
        assert_eq!(
            resolve_action_button(&filters, &template),
            ActionButton::GoPro
        );
    }

    #[test]
    fn test_resolve_accepts_filter_override() {
        let mut filters = FilterRegistry::new();
        filters.register(FilterHook::TemplateAction, |button, template| {
            if template.access_level <= 1 {
                ActionButton::Insert
            } else {
                button
            }
        });

        let pro = create_test_template("pro", TemplateKind::Block, 1);
        let expert = create_test_template("expert", TemplateKind::Block, 2);
        assert_eq!(resolve_action_button(&filters, &pro), ActionButton::Insert);
        assert_eq!(
            resolve_action_button(&filters, &expert),
            ActionButton::GoExpert
        );
    }
}
