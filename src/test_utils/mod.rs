//! Assertions and fixtures shared by the handler tests.
#![allow(missing_docs)]

pub(crate) mod cookie;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use cookie::{TEST_COOKIE_SECRET, get_cookie_jar, take_flash_from_response};
pub(crate) use form::{
    assert_form_input, assert_form_input_with_value, assert_form_submit_button_with_text,
    must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::{assert_content_type, assert_redirect, assert_status_ok, parse_json_body};
