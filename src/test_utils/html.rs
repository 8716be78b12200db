use axum::{body::Body, response::Response};
use scraper::Html;

use super::http::body_text;

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert_eq!(html.errors, Vec::<std::borrow::Cow<'_, str>>::new(), "HTML has parse errors");
}
