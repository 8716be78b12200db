use std::rc::Rc;

use expense_tracker_common::markup::{DELETE_ACTION_MARKER, DELETE_CONFIRMATION};
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::Document;

use crate::{dialogs::Dialogs, dom::select_all};

/// Ask for confirmation before any form whose action contains "delete" is
/// submitted, cancelling the submission if the user declines.
pub(crate) fn guard_delete_forms(document: &Document, dialogs: Rc<dyn Dialogs>) {
    for form in select_all(document, &format!("form[action*=\"{DELETE_ACTION_MARKER}\"]")) {
        let dialogs = dialogs.clone();

        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if !dialogs.confirm(DELETE_CONFIRMATION) {
                    event.prevent_default();
                }
            },
        )
        .forget();
    }
}
