//! Auto-dismissal of flash messages.

use expense_tracker_common::markup::{
    FLASH_DISPLAY_DURATION_MS, FLASH_FADE_ANIMATION, FLASH_FADE_DURATION_MS, FLASH_MESSAGE_CLASS,
};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::select_all;

/// Slide out and remove every flash message currently in `document`.
///
/// Each message stays for [FLASH_DISPLAY_DURATION_MS], then animates out for
/// [FLASH_FADE_DURATION_MS] before it is removed. The timers cannot be
/// cancelled and are dropped with the page.
pub(crate) fn schedule_flash_dismissal(document: &Document) {
    for message in select_all(document, &format!(".{FLASH_MESSAGE_CLASS}")) {
        Timeout::new(FLASH_DISPLAY_DURATION_MS, move || start_fade_out(message)).forget();
    }
}

fn start_fade_out(message: Element) {
    match message.dyn_ref::<HtmlElement>() {
        Some(element) => {
            if let Err(error) = element
                .style()
                .set_property("animation", FLASH_FADE_ANIMATION)
            {
                gloo::console::warn!("could not animate flash message", error);
            }
        }
        None => gloo::console::warn!("flash message is not an HTML element"),
    }

    Timeout::new(FLASH_FADE_DURATION_MS, move || message.remove()).forget();
}
