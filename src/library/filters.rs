//! Filter registry - the library's explicit extension point
//!
//! Replaces a global filter chain with a registry object handed to the
//! modal at construction. Filters attach to a named hook and run in
//! registration order; each receives the current value plus the template
//! under consideration and returns the (possibly unchanged) value. The
//! registry is assembled once at startup, so every hook that will ever
//! fire is known before the first transition.

use crate::library::buttons::ActionButton;
use crate::model::Template;
use std::collections::HashMap;

/// The closed set of hooks the library consults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterHook {
    /// Override the resolved action button for a template row
    TemplateAction,
}

type TemplateFilter = Box<dyn Fn(ActionButton, &Template) -> ActionButton>;

/// Ordered filter chains keyed by hook
#[derive(Default)]
pub struct FilterRegistry {
    chains: HashMap<FilterHook, Vec<TemplateFilter>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter to a hook's chain
    pub fn register<F>(&mut self, hook: FilterHook, filter: F)
    where
        F: Fn(ActionButton, &Template) -> ActionButton + 'static,
    {
        self.chains.entry(hook).or_default().push(Box::new(filter));
    }

    /// Run `value` through the hook's chain in registration order.
    /// An empty chain returns the input unchanged.
    pub fn apply(&self, hook: FilterHook, value: ActionButton, template: &Template) -> ActionButton {
        match self.chains.get(&hook) {
            Some(chain) => chain
                .iter()
                .fold(value, |current, filter| filter(current, template)),
            None => value,
        }
    }
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: Vec<(FilterHook, usize)> = self
            .chains
            .iter()
            .map(|(hook, chain)| (*hook, chain.len()))
            .collect();
        f.debug_struct("FilterRegistry")
            .field("chains", &counts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::template::tests::create_test_template;
    use crate::model::TemplateKind;

    #[test]
    fn test_empty_registry_is_identity() {
        let registry = FilterRegistry::new();
        let template = create_test_template("t", TemplateKind::Block, 2);
        assert_eq!(
            registry.apply(FilterHook::TemplateAction, ActionButton::GoExpert, &template),
            ActionButton::GoExpert
        );
    }

    #[test]
    fn test_filters_run_in_registration_order() {
        let mut registry = FilterRegistry::new();
        // First filter always upgrades to GoExpert, second always downgrades
        // to Insert; the last registration wins on the shared value.
        registry.register(FilterHook::TemplateAction, |_, _| ActionButton::GoExpert);
        registry.register(FilterHook::TemplateAction, |_, _| ActionButton::Insert);

        let template = create_test_template("t", TemplateKind::Block, 0);
        assert_eq!(
            registry.apply(FilterHook::TemplateAction, ActionButton::GoPro, &template),
            ActionButton::Insert
        );
    }

    #[test]
    fn test_filter_sees_upstream_value() {
        let mut registry = FilterRegistry::new();
        registry.register(FilterHook::TemplateAction, |button, _| match button {
            ActionButton::GoPro => ActionButton::GoExpert,
            other => other,
        });
        registry.register(FilterHook::TemplateAction, |button, _| match button {
            ActionButton::GoExpert => ActionButton::Insert,
            other => other,
        });

        let template = create_test_template("t", TemplateKind::Block, 1);
        // GoPro -> GoExpert -> Insert across the chain
        assert_eq!(
            registry.apply(FilterHook::TemplateAction, ActionButton::GoPro, &template),
            ActionButton::Insert
        );
    }
}
