//! `{{placeholder}}` token substitution
//!
//! Template text may reference page settings by name, e.g. `{{site_name}}`.
//! Unknown tokens are left verbatim so a missing setting is visible in the
//! rendered page rather than silently blanked.

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Matches `{{ token }}` with optional inner whitespace
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap());

/// Replace every known `{{token}}` in `text` with its value from `settings`
pub fn substitute(text: &str, settings: &BTreeMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            let token = &caps[1];
            match settings.get(token) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_known_token() {
        let s = settings(&[("site_name", "Acme")]);
        assert_eq!(substitute("Hello {{site_name}}!", &s), "Hello Acme!");
    }

    #[test]
    fn test_substitute_tolerates_inner_whitespace() {
        let s = settings(&[("tagline", "We build")]);
        assert_eq!(substitute("{{  tagline  }}", &s), "We build");
    }

    #[test]
    fn test_substitute_keeps_unknown_token_verbatim() {
        let s = settings(&[]);
        assert_eq!(substitute("Hi {{missing}}", &s), "Hi {{missing}}");
    }

    #[test]
    fn test_substitute_multiple_occurrences() {
        let s = settings(&[("x", "1"), ("y", "2")]);
        assert_eq!(substitute("{{x}}+{{y}}={{x}}{{y}}", &s), "1+2=12");
    }
}
