use leptos::prelude::*;

use feature_steps::{CornerControl, StepAttributes, StepSlots, compute_view_model};

use crate::widgets::SiteWidgets;

/// One entry in the onboarding checklist.
///
/// Attributes and slots are read once; the rendered structure is fixed for
/// the component's lifetime. The only mutable state is the collapse toggle,
/// and both the container's muted class and the content's truncation class
/// are driven by that one signal so they can never fall out of lockstep.
#[component]
pub fn FeatureStep(
    /// Heading text; the registered definition's default when omitted.
    #[prop(into, optional)]
    title: Option<String>,
    /// Start collapsed and muted.
    #[prop(optional)]
    disabled: bool,
    /// The step the user is on now: content forced visible, no toggle.
    #[prop(optional)]
    current_step: bool,
    /// Finished step: content revealed behind a collapse toggle.
    #[prop(optional)]
    completed: bool,
    /// Markup fragment for the image slot.
    #[prop(into, optional)]
    image: Option<String>,
    /// Markup fragment for the content slot.
    #[prop(into, optional)]
    content: Option<String>,
) -> impl IntoView {
    let definition = use_context::<SiteWidgets>()
        .map(|widgets| widgets.step_definition())
        .unwrap_or_default();

    let attrs = StepAttributes {
        title,
        disabled,
        current_step,
        completed,
    };
    let slots = StepSlots { image, content };
    let model = compute_view_model(&definition, &attrs, &slots);

    let (state, set_state) = signal(model.initial_toggle);
    let collapsed = move || state.get().is_collapsed();

    let label_definition = definition.clone();
    let toggle_label = move || label_definition.toggle_label(state.get()).to_string();

    let control = model.control.clone().map(|control| match control {
        CornerControl::Toggle => view! {
            <button
                class="toggle-more opacity-0 group-hover:opacity-100 transition-opacity duration-200 pt-1 pr-1 cursor-pointer absolute top-0 right-0 hover:underline"
                on:click=move |_| set_state.update(|s| *s = s.flipped())
            >
                {toggle_label}
            </button>
        }
        .into_any(),
        CornerControl::Advisory(message) => view! {
            <span class="opacity-0 group-hover:opacity-100 transition-opacity duration-200 pt-1 pr-1 cursor-default absolute top-0 right-0">
                {message}
            </span>
        }
        .into_any(),
    });

    view! {
        <div
            class="feature--step relative flex flex-col transition-all duration-300"
            class=("is-disabled", collapsed)
        >
            <div class="aside-title flex flex-row gap-4 items-center">
                <span inner_html=model.image_html.clone()></span>
                <h2 class="font-semibold">{model.title.clone()}</h2>
            </div>
            <div class="border-l-2 ml-5 pl-10">
                <div class="rounded-lg p-4 bg-slate-900" class=("hidden", !model.reveal_content)>
                    <div
                        class="feature--content"
                        class=("line-clamp-1", collapsed)
                        inner_html=model.content_html.clone()
                    ></div>
                </div>
            </div>
            {control}
        </div>
    }
}
