//! Navchrome UI entry point for WASM.

#![no_main]

use leptos::prelude::*;
use navchrome_ui::App;
use navchrome_ui::logging::{self, LoggingConfig};
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point for the WASM application.
/// This function is called automatically when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn start() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();

    if let Err(e) = logging::init(&LoggingConfig::auto()) {
        leptos::logging::warn!("Tracing disabled: {e}");
    }

    // Remove the static placeholder shown before hydration
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(placeholder) = document.get_element_by_id("nav-placeholder")
    {
        placeholder.remove();
    }

    mount_to_body(App);
}
