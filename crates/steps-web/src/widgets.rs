//! The widget set this site registers.
//!
//! Definitions live in an explicit [`Registry`] shared through Leptos
//! context, so components resolve their wording from the registry instead of
//! an ambient per-process one, and tests can build independent sets.

use std::sync::Arc;

use feature_steps::{Registry, StepDefinition};

pub const FEATURE_STEP_TAG: &str = "feature-step";

#[derive(Clone)]
pub struct SiteWidgets(Arc<Registry<StepDefinition>>);

impl SiteWidgets {
    /// Definition for the feature-step tag. Falls back to the stock wording
    /// if the tag was never registered.
    pub fn step_definition(&self) -> StepDefinition {
        self.0.get(FEATURE_STEP_TAG).cloned().unwrap_or_default()
    }

    pub fn registry(&self) -> &Registry<StepDefinition> {
        &self.0
    }
}

pub fn site_widgets() -> SiteWidgets {
    let mut registry = Registry::new();
    registry.register(FEATURE_STEP_TAG, StepDefinition::default());
    SiteWidgets(Arc::new(registry))
}
