//! Interaction polish for HTMX-driven pages.
//!
//! The page itself is rendered and swapped by the server plus HTMX; this
//! crate only layers cosmetic behavior on top: a fade while a partial
//! request is in flight, refresh-icon/spinner toggling, an optional
//! 30-second auto-refresh, and the `r` / `h` keyboard shortcuts.
//!
//! Loading the module installs everything. Auto-refresh is the exception:
//! `startAutoRefresh` / `stopAutoRefresh` are exported to the host page
//! but nothing invokes them at load.

pub mod auto_refresh;
pub mod shortcuts;
pub mod transitions;

use wasm_bindgen::prelude::*;

use pagelift_core::SwapVocabulary;

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let vocabulary = SwapVocabulary::default();
    let document = document()?;

    transitions::install(&document, &vocabulary)?;
    shortcuts::install(&document, &vocabulary)?;

    log::debug!("pagelift installed for {}", vocabulary.content_region);
    Ok(())
}

/// Re-activate the first content-region trigger every 30 seconds until
/// stopped. Restarting replaces the running interval instead of stacking
/// a second one.
#[wasm_bindgen(js_name = startAutoRefresh)]
pub fn start_auto_refresh() -> Result<(), JsValue> {
    auto_refresh::start(&SwapVocabulary::default())
}

/// Cancel auto-refresh. Calling this while idle is a no-op.
#[wasm_bindgen(js_name = stopAutoRefresh)]
pub fn stop_auto_refresh() {
    auto_refresh::stop();
}
