//! Browser implementations of the clipboard capabilities.
//!
//! `WebClipboard` prefers `navigator.clipboard.writeText`; when that API is
//! missing (insecure context, old engine) the legacy path builds a hidden
//! textarea, selects it, runs `document.execCommand("copy")`, and removes
//! the textarea again on every path. `DomPresenter` surfaces results through
//! the indicator's opacity classes, `window.alert`, and the console.

use feature_steps::{ClipboardBackend, CopyError, CopyPresenter};
use wasm_bindgen::{JsCast, JsValue};

pub struct WebClipboard;

impl WebClipboard {
    fn async_clipboard() -> Option<web_sys::Clipboard> {
        let navigator = web_sys::window()?.navigator();
        let nav_value: &JsValue = navigator.as_ref();
        let clipboard = js_sys::Reflect::get(nav_value, &JsValue::from_str("clipboard")).ok()?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return None;
        }
        clipboard.dyn_into::<web_sys::Clipboard>().ok()
    }
}

impl ClipboardBackend for WebClipboard {
    fn has_async_clipboard(&self) -> bool {
        Self::async_clipboard().is_some()
    }

    async fn write_text(&self, text: &str) -> Result<(), CopyError> {
        let clipboard =
            Self::async_clipboard().ok_or_else(|| CopyError::new("clipboard API unavailable"))?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| CopyError::new(js_error_message(&err)))
    }

    fn legacy_copy(&self, text: &str) -> Result<(), CopyError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CopyError::new("no document"))?;
        let body = document.body().ok_or_else(|| CopyError::new("no body"))?;

        let textarea: web_sys::HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(|err| CopyError::new(js_error_message(&err)))?
            .dyn_into()
            .map_err(|_| CopyError::new("textarea cast failed"))?;
        textarea.set_value(text);

        let _ = body.append_child(&textarea);
        textarea.select();
        let result = match document.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(CopyError::new("execCommand returned false")),
            Err(err) => Err(CopyError::new(js_error_message(&err))),
        };
        // The temporary surface goes away whether the command worked or not.
        let _ = body.remove_child(&textarea);

        result
    }
}

/// Shows and hides one button's "Copied!" indicator.
pub struct DomPresenter {
    indicator: web_sys::HtmlElement,
}

impl DomPresenter {
    pub fn new(indicator: web_sys::HtmlElement) -> Self {
        Self { indicator }
    }
}

impl CopyPresenter for DomPresenter {
    fn show_copied(&mut self) {
        let classes = self.indicator.class_list();
        let _ = classes.remove_1("opacity-0");
        let _ = classes.add_1("opacity-100");
    }

    fn hide_copied(&mut self) {
        let classes = self.indicator.class_list();
        let _ = classes.remove_1("opacity-100");
        let _ = classes.add_1("opacity-0");
    }

    fn alert_failure(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn report_error(&mut self, error: &CopyError) {
        web_sys::console::error_1(&error.to_string().into());
    }
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
