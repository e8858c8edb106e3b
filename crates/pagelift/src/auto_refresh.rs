//! Periodic re-activation of the content region's trigger element.
//!
//! Dormant by default: the exported start/stop functions are the only way
//! in. The interval handle lives in a thread-local slot (wasm has a single
//! execution context), and the closure is stored alongside the id so it
//! outlives the scheduling call.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use pagelift_core::{SwapVocabulary, AUTO_REFRESH_INTERVAL_MS};

struct IntervalHandle {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

thread_local! {
    static ACTIVE: RefCell<Option<IntervalHandle>> = const { RefCell::new(None) };
}

/// Schedule the recurring refresh. A live interval is canceled first, so
/// restarting never leaks the earlier handle.
pub fn start(vocabulary: &SwapVocabulary) -> Result<(), JsValue> {
    stop();

    let selector = vocabulary.trigger_selector();
    let tick = Closure::wrap(Box::new(move || {
        // No trigger in the region makes the tick a no-op.
        if let Some(trigger) = first_trigger(&selector) {
            trigger.click();
        }
    }) as Box<dyn FnMut()>);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref::<js_sys::Function>(),
        AUTO_REFRESH_INTERVAL_MS,
    )?;

    ACTIVE.with(|slot| *slot.borrow_mut() = Some(IntervalHandle { id, _tick: tick }));
    log::debug!("auto-refresh started ({}ms)", AUTO_REFRESH_INTERVAL_MS);
    Ok(())
}

/// Cancel the recurring refresh; a no-op when none is running.
pub fn stop() {
    ACTIVE.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle.id);
            }
            log::debug!("auto-refresh stopped");
        }
    });
}

/// Whether an interval is currently scheduled.
pub fn is_running() -> bool {
    ACTIVE.with(|slot| slot.borrow().is_some())
}

fn first_trigger(selector: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}
