//! Explicit widget registry.
//!
//! Instead of a process-wide ambient registry keyed by tag name, each host
//! owns a `Registry` value. Registration is idempotent, so independent widget
//! sets can be combined (and tests can build as many registries as they like)
//! without tripping over duplicates.

use std::collections::HashMap;

/// Maps custom-tag names to widget definitions of type `D`.
#[derive(Debug, Clone)]
pub struct Registry<D> {
    entries: HashMap<String, D>,
}

impl<D> Default for Registry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Registry<D> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `definition` under `tag`. Returns `false` and changes
    /// nothing when the tag name is invalid or already taken; the first
    /// registration for a tag wins.
    pub fn register(&mut self, tag: &str, definition: D) -> bool {
        if !is_valid_tag(tag) || self.entries.contains_key(tag) {
            return false;
        }
        self.entries.insert(tag.to_string(), definition);
        true
    }

    pub fn get(&self, tag: &str) -> Option<&D> {
        self.entries.get(tag)
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered tag names, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Custom-element naming rule: ASCII lowercase, starts with a letter, and
/// contains at least one hyphen so the name can never collide with a
/// built-in tag.
pub fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && tag.contains('-')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StepDefinition;

    #[test]
    fn register_then_get() {
        let mut registry = Registry::new();
        assert!(registry.register("feature-step", StepDefinition::default()));
        assert!(registry.is_registered("feature-step"));
        assert_eq!(
            registry.get("feature-step").map(|d| d.default_title.as_str()),
            Some("Default Title")
        );
    }

    #[test]
    fn duplicate_registration_is_a_noop_first_wins() {
        let mut registry = Registry::new();
        let first = StepDefinition {
            default_title: "first".into(),
            ..StepDefinition::default()
        };
        let second = StepDefinition {
            default_title: "second".into(),
            ..StepDefinition::default()
        };
        assert!(registry.register("feature-step", first));
        assert!(!registry.register("feature-step", second));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("feature-step").map(|d| d.default_title.as_str()),
            Some("first")
        );
    }

    #[test]
    fn invalid_tag_names_are_rejected() {
        let mut registry = Registry::new();
        for tag in ["", "div", "Feature-Step", "-step", "feature step", "1-up"] {
            assert!(!registry.register(tag, StepDefinition::default()), "{tag:?}");
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn independent_registries_do_not_interfere() {
        let mut a = Registry::new();
        let mut b = Registry::new();
        assert!(a.register("feature-step", StepDefinition::default()));
        assert!(b.register("feature-step", StepDefinition::default()));
        assert!(b.register("wizard-step", StepDefinition::default()));
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
        assert!(!a.is_registered("wizard-step"));
    }
}
