//! The 500 page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

const GENERIC_DESCRIPTION: &str = "Sorry, something went wrong.";
const GENERIC_FIX: &str = "Try again later or check the server logs";

/// What went wrong and what the user can do about it.
pub struct InternalServerError<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        InternalServerError {
            description: GENERIC_DESCRIPTION,
            fix: GENERIC_FIX,
        }
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        let page = error_view("Internal Server Error", "500", self.description, self.fix);

        (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
    }
}

/// Handler for the error route, which always renders the generic page.
pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}
