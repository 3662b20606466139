//! Core logic for the feature-step widget set.
//!
//! Everything here is plain data: attribute parsing, view-model computation,
//! the two-state collapse toggle, an explicit tag registry, and the
//! clipboard-copy flow behind injected capability traits. No DOM types appear
//! in this crate, so the full behavior grid runs under native `cargo test`.
//! The `steps-web` crate applies these view models to a live document.

pub mod clipboard;
pub mod model;
pub mod registry;

pub use clipboard::{
    COPY_FAILED_MESSAGE, ClipboardBackend, CopyError, CopyOutcome, CopyPresenter,
    FEEDBACK_VISIBLE_MS, run_copy,
};
pub use model::{
    CornerControl, StepAttributes, StepDefinition, StepSlots, StepViewModel, ToggleState,
    compute_view_model,
};
pub use registry::Registry;
