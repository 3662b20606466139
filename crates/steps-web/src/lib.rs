pub mod app;
pub mod components;
pub mod environment;
pub mod pages;
pub mod widgets;

#[cfg(feature = "hydrate")]
pub mod web_clipboard;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
