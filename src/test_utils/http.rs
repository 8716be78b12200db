use axum::{
    body::Body,
    http::{StatusCode, header::CONTENT_TYPE, header::LOCATION},
    response::Response,
};

pub(crate) async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

pub(crate) async fn parse_json_body(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).expect("Response body is not JSON")
}

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let got = response
        .headers()
        .get(CONTENT_TYPE)
        .expect("Response has no content-type");

    assert_eq!(got, content_type);
}

/// Assert `response` is a 303 redirect to `endpoint`.
#[track_caller]
pub(crate) fn assert_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response
        .headers()
        .get(LOCATION)
        .expect("Redirect has no location");
    assert_eq!(location, endpoint);
}
