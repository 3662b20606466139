//! Clipboard-copy flow behind injected capabilities.
//!
//! The copy algorithm never touches `navigator` or `document` directly; it
//! sees the platform through [`ClipboardBackend`] and reports back through
//! [`CopyPresenter`]. The web crate supplies the real implementations, tests
//! supply recording mocks.

use std::fmt;
use std::future::Future;

/// How long the "copied" indicator stays visible, in milliseconds.
pub const FEEDBACK_VISIBLE_MS: u32 = 2500;

/// User-facing message for any copy failure. The error itself goes to the
/// diagnostic channel; the user just gets manual-copy guidance.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy text, please try manually.";

/// A failed clipboard write or legacy copy command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyError {
    message: String,
}

impl CopyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard copy failed: {}", self.message)
    }
}

impl std::error::Error for CopyError {}

/// The platform's two copy mechanisms.
#[allow(async_fn_in_trait)]
pub trait ClipboardBackend {
    /// Whether the asynchronous clipboard-write capability exists at all.
    /// Absence selects the legacy path; a *rejection* of the async write
    /// does not.
    fn has_async_clipboard(&self) -> bool;

    /// Primary path: asynchronous clipboard write.
    async fn write_text(&self, text: &str) -> Result<(), CopyError>;

    /// Fallback path: synchronous legacy copy command. Implementations must
    /// remove any temporary input surface on success and failure alike.
    fn legacy_copy(&self, text: &str) -> Result<(), CopyError>;
}

/// Where copy results surface: the transient indicator, the blocking alert,
/// and the diagnostic channel.
pub trait CopyPresenter {
    fn show_copied(&mut self);
    fn hide_copied(&mut self);
    fn alert_failure(&mut self, message: &str);
    fn report_error(&mut self, error: &CopyError);
}

/// What a copy attempt came to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    CopiedViaApi,
    CopiedViaFallback,
    Failed(CopyError),
}

/// Copy `text` to the clipboard and drive the feedback cycle.
///
/// On success the indicator is shown, `hide_delay` is awaited, and the
/// indicator is hidden again. On failure the error goes to the diagnostic
/// channel followed by exactly one user-facing alert, and the indicator is
/// never shown. Callers fire-and-forget this future; overlapping invocations
/// each run their own feedback cycle, which is benign since every hide sets
/// the same state.
pub async fn run_copy<B, P, F, Fut>(
    backend: &B,
    presenter: &mut P,
    text: &str,
    hide_delay: F,
) -> CopyOutcome
where
    B: ClipboardBackend,
    P: CopyPresenter,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let attempt = if backend.has_async_clipboard() {
        backend.write_text(text).await.map(|()| CopyOutcome::CopiedViaApi)
    } else {
        backend.legacy_copy(text).map(|()| CopyOutcome::CopiedViaFallback)
    };

    match attempt {
        Ok(outcome) => {
            presenter.show_copied();
            hide_delay().await;
            presenter.hide_copied();
            outcome
        }
        Err(error) => {
            presenter.report_error(&error);
            presenter.alert_failure(COPY_FAILED_MESSAGE);
            CopyOutcome::Failed(error)
        }
    }
}
