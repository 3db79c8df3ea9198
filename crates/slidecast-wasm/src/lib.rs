use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod api;
mod app;
mod audio;
mod dom;
mod markdown;
mod render;
mod utils;

use slidecast_core::PresenterConfig;

/// Initialize the WASM application
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("Slidecast WASM initialized");
}

/// Wire up the presenter page
///
/// `api_base_url` defaults to the local development backend.
#[wasm_bindgen]
pub fn start_presenter(api_base_url: Option<String>) -> Result<(), JsValue> {
    let config = match api_base_url {
        Some(url) if !url.is_empty() => PresenterConfig::new(url),
        _ => PresenterConfig::default(),
    };
    log::info!("Starting presenter against {}", config.api_base_url);
    app::PresenterApp::new(config)?.start()
}

/// Get the window object
fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}

/// Get the document object
fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object"))
}
