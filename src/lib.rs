//! Behavior layer for the Maison Noir landing page.
//!
//! The page itself is static HTML; this crate hydrates it with the
//! interactive pieces: the light/dark theme toggle, the one-shot translation
//! pass, the project tab switcher, the before/after comparison sliders and
//! the scroll-driven parallax and reveal effects. Every behavior hooks into
//! markup it finds on the page and stays inert when that markup is absent.

use wasm_bindgen::prelude::wasm_bindgen;

pub mod config;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod scroll;
pub mod slider;
pub mod tabs;
pub mod theme;

/// Module entry point, invoked by the browser once the wasm is loaded.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    boot();
}

/// Starts every page behavior. Failures are logged and contained so one
/// broken section cannot take down the rest of the page.
pub fn boot() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("Landing behaviors disabled: {}", err);
            return;
        }
    };

    if let Err(err) = theme::init(&document) {
        log::error!("Failed to wire theme toggles: {}", err);
    }
    if let Err(err) = i18n::apply(&document) {
        log::error!("Failed to apply translations: {}", err);
    }
    if let Err(err) = tabs::init(&document) {
        log::error!("Failed to wire project tabs: {}", err);
    }
    if let Err(err) = slider::init(&document) {
        log::error!("Failed to wire comparison sliders: {}", err);
    }
    if let Err(err) = scroll::init() {
        log::error!("Failed to start scroll effects: {}", err);
    }
}
