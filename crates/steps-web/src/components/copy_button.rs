use leptos::html;
use leptos::prelude::*;

/// A button that copies its command text to the clipboard and flashes a
/// "Copied!" indicator. The click handler reads the text back out of the
/// rendered source span, so what the user sees is exactly what gets copied.
#[component]
pub fn CopyButton(
    /// Shell command to copy when clicked.
    #[prop(into)]
    text: String,
) -> impl IntoView {
    let source_ref: NodeRef<html::Span> = NodeRef::new();
    let indicator_ref: NodeRef<html::Span> = NodeRef::new();

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::web_clipboard::{DomPresenter, WebClipboard};
            use feature_steps::FEEDBACK_VISIBLE_MS;

            let Some(source) = source_ref.get_untracked() else {
                return;
            };
            let Some(indicator) = indicator_ref.get_untracked() else {
                return;
            };
            let text = source.text_content().unwrap_or_default();
            leptos::task::spawn_local(async move {
                let mut presenter = DomPresenter::new(indicator.into());
                feature_steps::run_copy(&WebClipboard, &mut presenter, &text, || {
                    gloo_timers::future::TimeoutFuture::new(FEEDBACK_VISIBLE_MS)
                })
                .await;
            });
        }
    };

    view! {
        <button
            type="button"
            class="copy-command px-3 py-1 border border-dashed border-slate-600 hover:bg-slate-800 transition-colors cursor-pointer"
            on:click=on_copy
        >
            <span node_ref=source_ref class="copy-text font-mono">
                {text}
            </span>
            <span
                node_ref=indicator_ref
                class="copied-indicator opacity-0 transition-opacity duration-200 ml-2"
            >
                "Copied!"
            </span>
        </button>
    }
}
