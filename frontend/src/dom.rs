//! Small helpers over `web_sys` lookups.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

/// All elements in `document` matching `selector`.
///
/// An invalid selector is logged and matches nothing.
pub(crate) fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(error) => {
            gloo::console::warn!(format!("invalid selector {selector}"), error);
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The current value of the field named `name` in `form`.
///
/// Returns `None` if the form has no such field.
pub(crate) fn field_value(form: &HtmlFormElement, name: &str) -> Option<String> {
    let field = form
        .query_selector(&format!("[name=\"{name}\"]"))
        .ok()
        .flatten()?;

    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else if let Some(text_area) = field.dyn_ref::<HtmlTextAreaElement>() {
        Some(text_area.value())
    } else {
        field.get_attribute("value").or(Some(String::new()))
    }
}
