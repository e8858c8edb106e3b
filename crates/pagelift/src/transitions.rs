//! Fade/spinner feedback around the request lifecycle.
//!
//! The library fires its before/after events on the originating element
//! and they bubble to the body, so one listener pair covers every trigger
//! on the page, including elements swapped in later.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement};

use pagelift_core::feedback::{
    SwapPhase, BUTTON_TEXT_SELECTOR, FADE_TRANSITION, REFRESH_ICON_SELECTOR,
};
use pagelift_core::SwapVocabulary;

/// Attach the before/after listeners to the document body.
pub fn install(document: &Document, vocabulary: &SwapVocabulary) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let before = Closure::wrap(Box::new(move |event: Event| {
        apply_phase(&event, SwapPhase::Pending);
    }) as Box<dyn FnMut(Event)>);
    body.add_event_listener_with_callback(&vocabulary.before_event, before.as_ref().unchecked_ref())?;
    before.forget();

    let after = Closure::wrap(Box::new(move |event: Event| {
        apply_phase(&event, SwapPhase::Settled);
    }) as Box<dyn FnMut(Event)>);
    body.add_event_listener_with_callback(&vocabulary.after_event, after.as_ref().unchecked_ref())?;
    after.forget();

    Ok(())
}

fn apply_phase(event: &Event, phase: SwapPhase) {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let style = target.style();
    if phase == SwapPhase::Pending {
        let _ = style.set_property("transition", FADE_TRANSITION);
    }
    let _ = style.set_property("opacity", phase.target_opacity());

    // Refresh-style buttons carry these descendants; anything else skips.
    if let Some(icon) = descendant(&target, REFRESH_ICON_SELECTOR) {
        let _ = icon.style().set_property("display", phase.icon_display());
    }
    if let Some(text) = descendant(&target, BUTTON_TEXT_SELECTOR) {
        let _ = text.style().set_property("opacity", phase.text_opacity());
    }
}

fn descendant(element: &HtmlElement, selector: &str) -> Option<HtmlElement> {
    element
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|found| found.dyn_into::<HtmlElement>().ok())
}
