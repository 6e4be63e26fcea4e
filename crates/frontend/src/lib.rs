pub mod app;
pub mod pages;
pub mod widgets;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

/// Attach tab widgets to markup rendered outside the Leptos app.
///
/// Returns the number of tab lists attached. Safe to call repeatedly.
#[wasm_bindgen(js_name = attachTabs)]
pub fn attach_tabs() -> u32 {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|document| widgets::attach_all(&document) as u32)
        .unwrap_or(0)
}
