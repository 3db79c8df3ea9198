use wasm_bindgen::{JsCast, JsValue};
use web_sys::DomException;

/// Render a JS error value for logs and messages
pub fn describe_js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Whether `value` is the `AbortError` a media element uses to reject a
/// play request cut short by `pause()` or a new source
pub fn is_abort_error(value: &JsValue) -> bool {
    value
        .dyn_ref::<DomException>()
        .is_some_and(|e| e.name() == "AbortError")
}
