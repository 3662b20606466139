use leptos::prelude::*;

use crate::components::{CopyButton, FeatureStep};
use crate::environment::{EnvironmentInfo, fetch_environment};

const STEP_DONE_MARK: &str =
    "<span class=\"step-mark text-green-400 font-bold\">\u{2713}</span>";
const STEP_TODO_MARK: &str =
    "<span class=\"step-mark text-slate-500 font-bold\">\u{2192}</span>";

#[component]
pub fn HomePage() -> impl IntoView {
    let environment = Resource::new(|| (), |_| fetch_environment());

    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8">
                <h1 class="text-2xl font-bold">"Demo Project"</h1>
                <div class="text-slate-400 mt-2">"A guided tour of your first deployment"</div>
            </header>

            <Suspense fallback=move || view! { <EnvironmentSkeleton /> }>
                {move || {
                    environment.get().map(|result| {
                        let info = result.unwrap_or_default();
                        view! {
                            <EnvironmentBanner info=info.clone() />
                            <Checklist info=info />
                        }
                    })
                }}
            </Suspense>

            <section id="commands" class="mt-8">
                <h2 class="font-bold uppercase mb-3">"Quick commands"</h2>
                <div class="flex flex-col gap-2 items-start">
                    <CopyButton text="deploy service:add redis-session" />
                    <CopyButton text="deploy environment:branch preview" />
                    <CopyButton text="deploy environment:merge preview" />
                </div>
            </section>
        </main>
    }
}

#[component]
fn EnvironmentBanner(info: EnvironmentInfo) -> impl IntoView {
    view! {
        <div class="mb-6 border border-dashed border-slate-600 p-4">
            <div>
                <strong>"ENVIRONMENT"</strong> "  " {info.environment_type}
            </div>
            <div>
                <strong>"SESSIONS"</strong> "     " {info.session_storage}
            </div>
        </div>
    }
}

/// Loading placeholder while environment detection runs.
#[component]
fn EnvironmentSkeleton() -> impl IntoView {
    view! {
        <div class="mb-6 border border-dashed border-slate-600 p-4">
            <div class="skeleton-line">"ENVIRONMENT  \u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}"</div>
            <div class="skeleton-line">"SESSIONS     \u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}"</div>
        </div>
    }
}

/// The "What's next" checklist. Step states follow the hosting environment:
/// until a session store is connected that step is current; afterwards the
/// preview-environment step takes over.
#[component]
fn Checklist(info: EnvironmentInfo) -> impl IntoView {
    let has_session_service = info.has_session_service();

    view! {
        <section id="whats-next" class="group">
            <h2 class="font-bold uppercase mb-3">"What's next"</h2>
            <div class="space-y-4">
                <FeatureStep
                    title="Create your first project"
                    completed=true
                    image=STEP_DONE_MARK
                    content="<p>Your project scaffold is deployed and serving this page.</p>"
                />
                <FeatureStep
                    title="Connect a session store"
                    current_step=!has_session_service
                    completed=has_session_service
                    image=if has_session_service { STEP_DONE_MARK } else { STEP_TODO_MARK }
                    content="<p>Add a Redis service and sessions move out of local files. \
                             Run <code>deploy service:add redis-session</code>, then redeploy.</p>"
                />
                <FeatureStep
                    title="Branch a preview environment"
                    current_step=has_session_service
                    disabled=!has_session_service
                    image=STEP_TODO_MARK
                    content="<p>Branch <code>preview</code> to get an isolated copy of \
                             production, data included.</p>"
                />
                <FeatureStep
                    title="Merge to production"
                    disabled=true
                    image=STEP_TODO_MARK
                    content="<p>Happy with the preview? <code>deploy environment:merge</code> \
                             ships it.</p>"
                />
            </div>
        </section>
    }
}
