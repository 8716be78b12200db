//! Browser enhancements for the expense tracker's server-rendered pages.
//!
//! Compiled to WebAssembly and loaded by every page. On start it:
//! - schedules flash messages to slide out and disappear,
//! - validates expense forms before they are submitted and marks their submit
//!   button as busy,
//! - asks for confirmation before a delete form is submitted.
//!
//! It also exports [format_currency] and [format_date] for other scripts on
//! the page.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

mod delete_guard;
mod dialogs;
mod dom;
mod expense_form;
mod flash;

pub use dialogs::{BrowserDialogs, Dialogs};

/// Wire every enhancement into `document`.
///
/// Each behaviour is registered exactly once per call and only for elements
/// that exist when it is called.
pub fn enhance_page(document: &Document, dialogs: Rc<dyn Dialogs>) {
    flash::schedule_flash_dismissal(document);
    expense_form::guard_expense_forms(document, dialogs.clone());
    delete_guard::guard_delete_forms(document, dialogs);

    gloo::console::info!("Expense Tracker initialized successfully!");
}

#[wasm_bindgen(start)]
pub fn start() {
    let document = gloo::utils::document();

    // Module scripts usually run after parsing, but the module may also be
    // loaded from a script that runs while the document is still loading.
    if document.ready_state() == "loading" {
        let target = document.clone();
        gloo::events::EventListener::once(&target, "DOMContentLoaded", move |_| {
            enhance_page(&document, Rc::new(BrowserDialogs));
        })
        .forget();
    } else {
        enhance_page(&document, Rc::new(BrowserDialogs));
    }
}

/// Format a number, or text starting with a number, as rupees with two
/// decimals, e.g. `formatCurrency(1234.5)` is "₹1234.50".
///
/// Anything that is not a number renders as "₹NaN".
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: JsValue) -> String {
    match (amount.as_f64(), amount.as_string()) {
        (Some(number), _) => expense_tracker_common::format_currency(number),
        (None, Some(text)) => expense_tracker_common::format_currency_str(&text),
        (None, None) => expense_tracker_common::format_currency(f64::NAN),
    }
}

/// Format an ISO-8601 date as a short date, e.g. `formatDate("2024-03-05")`
/// is "5 Mar 2024".
///
/// Unreadable dates render as "Invalid Date".
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date_string: &str) -> String {
    expense_tracker_common::format_date(date_string)
}
