use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::HomePage;
use crate::widgets;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(widgets::site_widgets());

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"404 - Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
