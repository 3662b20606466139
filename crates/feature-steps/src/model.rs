//! View-model computation for a single feature step.
//!
//! A step is configured entirely through attributes and two markup slots,
//! read once at creation. `compute_view_model` turns those inputs into a
//! `StepViewModel` deterministically; applying the view model to a document
//! is a separate concern handled by the web crate.

use serde::{Deserialize, Serialize};

/// Per-tag rendering policy: default text and control labels.
///
/// A definition is what gets registered under a custom tag name, so two tags
/// can share the widget logic but differ in wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub default_title: String,
    pub default_content: String,
    /// Shown in place of the toggle when content is not revealable.
    pub advisory_message: String,
    pub show_more_label: String,
    pub show_less_label: String,
}

impl Default for StepDefinition {
    fn default() -> Self {
        Self {
            default_title: "Default Title".to_string(),
            default_content: "Default content".to_string(),
            advisory_message: "Complete current step to proceed.".to_string(),
            show_more_label: "Show more".to_string(),
            show_less_label: "Show less".to_string(),
        }
    }
}

impl StepDefinition {
    /// Button label for the *next* action implied by `state`: expanding when
    /// collapsed, collapsing when expanded. Never describes the current state.
    pub fn toggle_label(&self, state: ToggleState) -> &str {
        match state {
            ToggleState::Collapsed => &self.show_more_label,
            ToggleState::Expanded => &self.show_less_label,
        }
    }
}

/// Attribute set read once at creation. Boolean attributes follow HTML
/// presence semantics: being listed at all means `true`, whatever the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepAttributes {
    pub title: Option<String>,
    pub disabled: bool,
    pub current_step: bool,
    pub completed: bool,
}

impl StepAttributes {
    /// Parse from raw `(name, value)` pairs. Unknown names are ignored and a
    /// later duplicate `title` wins, matching last-write attribute behavior.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut attrs = Self::default();
        for (name, value) in pairs {
            match name {
                "title" => attrs.title = Some(value.to_string()),
                "disabled" => attrs.disabled = true,
                "current-step" => attrs.current_step = true,
                "completed" => attrs.completed = true,
                _ => {}
            }
        }
        attrs
    }

    /// Whether the step body may be shown at all. Derived, never stored.
    pub fn can_reveal_content(&self) -> bool {
        self.current_step || self.completed
    }
}

/// Markup fragments lifted out of the nested image/content slots.
/// `None` means the slot element was absent and the definition's default
/// applies; an empty string means the slot was present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSlots {
    pub image: Option<String>,
    pub content: Option<String>,
}

/// Collapsed/expanded phase of a revealable step. This is the widget's only
/// runtime-mutable state; everything else is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleState {
    Expanded,
    Collapsed,
}

impl ToggleState {
    /// Initial phase: a `disabled` step starts collapsed.
    pub fn initial(disabled: bool) -> Self {
        if disabled { Self::Collapsed } else { Self::Expanded }
    }

    /// The single transition. Unconditional, no terminal state; the toggle
    /// cycles indefinitely.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }
}

/// What occupies the step's corner control slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerControl {
    /// Collapse/expand button. Its live label comes from
    /// [`StepDefinition::toggle_label`] so it can never go stale.
    Toggle,
    /// Static advisory shown when content is not revealable.
    Advisory(String),
}

/// Everything the document layer needs to render one step, derived once from
/// attributes and slots. Immutable after computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepViewModel {
    pub title: String,
    pub image_html: String,
    pub content_html: String,
    /// `current-step OR completed`; when false the body is hidden entirely,
    /// not merely collapsed.
    pub reveal_content: bool,
    pub initial_toggle: ToggleState,
    /// `None` for the current step: content is forced visible and no control
    /// of any kind is shown.
    pub control: Option<CornerControl>,
}

/// Pure render decision. Missing attributes and slots fall back to the
/// definition's defaults; nothing here can fail.
///
/// The toggle appears whenever content is revealable and the step is not
/// current. Since revealability is derived as `current OR completed`, a
/// revealable non-current step is necessarily completed, so this single
/// condition is equivalent to also demanding `completed` explicitly.
pub fn compute_view_model(
    def: &StepDefinition,
    attrs: &StepAttributes,
    slots: &StepSlots,
) -> StepViewModel {
    let reveal_content = attrs.can_reveal_content();
    let control = if !reveal_content {
        Some(CornerControl::Advisory(def.advisory_message.clone()))
    } else if attrs.current_step {
        None
    } else {
        Some(CornerControl::Toggle)
    };

    StepViewModel {
        title: attrs
            .title
            .clone()
            .unwrap_or_else(|| def.default_title.clone()),
        image_html: slots.image.clone().unwrap_or_default(),
        content_html: slots
            .content
            .clone()
            .unwrap_or_else(|| def.default_content.clone()),
        reveal_content,
        initial_toggle: ToggleState::initial(attrs.disabled),
        control,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(disabled: bool, current: bool, completed: bool) -> StepAttributes {
        StepAttributes {
            title: None,
            disabled,
            current_step: current,
            completed,
        }
    }

    fn vm(attrs: &StepAttributes) -> StepViewModel {
        compute_view_model(&StepDefinition::default(), attrs, &StepSlots::default())
    }

    #[test]
    fn content_visibility_matches_current_or_completed() {
        for disabled in [false, true] {
            for current in [false, true] {
                for completed in [false, true] {
                    let model = vm(&attrs(disabled, current, completed));
                    assert_eq!(
                        model.reveal_content,
                        current || completed,
                        "disabled={disabled} current={current} completed={completed}"
                    );
                }
            }
        }
    }

    #[test]
    fn advisory_shown_exactly_when_content_is_hidden() {
        for disabled in [false, true] {
            for current in [false, true] {
                for completed in [false, true] {
                    let model = vm(&attrs(disabled, current, completed));
                    let advisory = matches!(model.control, Some(CornerControl::Advisory(_)));
                    assert_eq!(advisory, !(current || completed));
                }
            }
        }
    }

    #[test]
    fn toggle_shown_exactly_for_revealable_non_current_steps() {
        for disabled in [false, true] {
            for current in [false, true] {
                for completed in [false, true] {
                    let model = vm(&attrs(disabled, current, completed));
                    let toggle = matches!(model.control, Some(CornerControl::Toggle));
                    assert_eq!(toggle, (current || completed) && !current);
                }
            }
        }
    }

    #[test]
    fn current_step_never_gets_a_control() {
        let model = vm(&attrs(false, true, true));
        assert!(model.control.is_none());
        assert!(model.reveal_content);
    }

    #[test]
    fn defaults_substitute_for_missing_title_and_slots() {
        let model = vm(&attrs(false, false, true));
        assert_eq!(model.title, "Default Title");
        assert_eq!(model.image_html, "");
        assert_eq!(model.content_html, "Default content");
    }

    #[test]
    fn present_but_empty_content_slot_stays_empty() {
        let slots = StepSlots {
            image: None,
            content: Some(String::new()),
        };
        let model = compute_view_model(
            &StepDefinition::default(),
            &attrs(false, false, true),
            &slots,
        );
        assert_eq!(model.content_html, "");
    }

    #[test]
    fn attribute_parsing_follows_presence_semantics() {
        let attrs = StepAttributes::from_pairs([
            ("title", "Create a project"),
            ("completed", ""),
            ("data-theme", "dark"),
        ]);
        assert_eq!(attrs.title.as_deref(), Some("Create a project"));
        assert!(attrs.completed);
        assert!(!attrs.disabled);
        assert!(!attrs.current_step);
    }

    #[test]
    fn duplicate_title_attribute_last_write_wins() {
        let attrs = StepAttributes::from_pairs([("title", "first"), ("title", "second")]);
        assert_eq!(attrs.title.as_deref(), Some("second"));
    }

    #[test]
    fn disabled_controls_initial_toggle_state() {
        assert_eq!(vm(&attrs(true, false, true)).initial_toggle, ToggleState::Collapsed);
        assert_eq!(vm(&attrs(false, false, true)).initial_toggle, ToggleState::Expanded);
    }

    #[test]
    fn toggle_parity_over_repeated_flips() {
        for initial in [ToggleState::Expanded, ToggleState::Collapsed] {
            let mut state = initial;
            for flips in 1..=6 {
                state = state.flipped();
                if flips % 2 == 0 {
                    assert_eq!(state, initial);
                } else {
                    assert_eq!(state, initial.flipped());
                }
            }
        }
    }

    #[test]
    fn toggle_label_always_names_the_next_action() {
        let def = StepDefinition::default();
        let mut state = ToggleState::initial(true);
        assert_eq!(def.toggle_label(state), "Show more");
        state = state.flipped();
        assert_eq!(def.toggle_label(state), "Show less");
        state = state.flipped();
        assert_eq!(def.toggle_label(state), "Show more");
    }
}
