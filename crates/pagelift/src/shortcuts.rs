//! Global keyboard shortcuts: `r` refreshes the current view, `h` goes
//! home. Resolution lives in `pagelift_core::shortcuts`; this module only
//! gathers the event state and executes the resolved action.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use pagelift_core::shortcuts::{is_editable, resolve, ShortcutAction, HOME_PATH};
use pagelift_core::SwapVocabulary;

/// Attach the keydown listener to the document.
pub fn install(document: &Document, vocabulary: &SwapVocabulary) -> Result<(), JsValue> {
    let selector = vocabulary.button_trigger_selector();

    let handler = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let action = resolve(
            &event.key(),
            event.ctrl_key(),
            event.meta_key(),
            focus_in_editable(),
        );

        match action {
            Some(ShortcutAction::RefreshView) => {
                if let Some(button) = first_button(&selector) {
                    button.click();
                }
            }
            Some(ShortcutAction::GoHome) => go_home(),
            None => {}
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    document.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// True while focus sits in an element that receives typed input.
/// Letter shortcuts must not hijack typing.
fn focus_in_editable() -> bool {
    let Some(active) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
    else {
        return false;
    };

    let content_editable = active
        .dyn_ref::<HtmlElement>()
        .map(|element| element.is_content_editable())
        .unwrap_or(false);
    is_editable(&active.tag_name(), content_editable)
}

fn first_button(selector: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn go_home() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(HOME_PATH);
    }
}
