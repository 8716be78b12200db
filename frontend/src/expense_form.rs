//! Submit-time validation and busy indicator for expense forms.

use std::rc::Rc;

use expense_tracker_common::{
    ExpenseSubmission,
    markup::{AMOUNT_FIELD, CATEGORY_FIELD, DATE_FIELD, EXPENSE_FORM_CLASS, SAVING_LABEL},
};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlButtonElement, HtmlFormElement};

use crate::{
    dialogs::Dialogs,
    dom::{field_value, select_all},
};

/// Validate every expense form in `document` when it is submitted.
///
/// An invalid submission is cancelled and the user is told why with an alert.
/// A valid submission goes ahead with its submit button disabled and
/// relabelled as saving.
pub(crate) fn guard_expense_forms(document: &Document, dialogs: Rc<dyn Dialogs>) {
    for element in select_all(document, &format!("form.{EXPENSE_FORM_CLASS}")) {
        let form = match element.dyn_into::<HtmlFormElement>() {
            Ok(form) => form,
            Err(_) => {
                gloo::console::warn!("expense form is not a form element");
                continue;
            }
        };

        let dialogs = dialogs.clone();
        let target = form.clone();

        EventListener::new_with_options(
            &target,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| on_submit(&form, event, dialogs.as_ref()),
        )
        .forget();
    }
}

fn on_submit(form: &HtmlFormElement, event: &Event, dialogs: &dyn Dialogs) {
    let amount = field_value(form, AMOUNT_FIELD);
    let category = field_value(form, CATEGORY_FIELD);
    let date = field_value(form, DATE_FIELD);

    let submission = ExpenseSubmission {
        amount: amount.as_deref(),
        category: category.as_deref(),
        date: date.as_deref(),
    };

    match submission.validate() {
        Ok(()) if !event.default_prevented() => show_busy(form),
        Ok(()) => {}
        Err(errors) => {
            event.prevent_default();
            dialogs.alert(&errors.message());
        }
    }
}

fn show_busy(form: &HtmlFormElement) {
    let button = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok());

    if let Some(button) = button {
        button.set_disabled(true);
        button.set_text_content(Some(SAVING_LABEL));
    }
}
