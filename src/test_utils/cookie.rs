use axum::{body::Body, http::header::SET_COOKIE, response::Response};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key},
};

use crate::{
    app_state::create_cookie_key,
    flash::{FLASH_COOKIE, FlashMessage},
};

pub(crate) const TEST_COOKIE_SECRET: &str = "foobar";

pub(crate) fn get_cookie_key() -> Key {
    create_cookie_key(TEST_COOKIE_SECRET)
}

pub(crate) fn get_cookie_jar() -> PrivateCookieJar {
    PrivateCookieJar::new(get_cookie_key())
}

/// Decrypt the flash messages set by `response`, or an empty list if the
/// response does not set any.
#[track_caller]
pub(crate) fn take_flash_from_response(response: &Response<Body>) -> Vec<FlashMessage> {
    let jar = get_cookie_jar();

    for header in response.headers().get_all(SET_COOKIE) {
        let header = header
            .to_str()
            .expect("Could not convert set-cookie header to str")
            .to_owned();
        let cookie = Cookie::parse_encoded(header).expect("Could not parse set-cookie header");

        if cookie.name() != FLASH_COOKIE || cookie.value().is_empty() {
            continue;
        }

        let cookie = jar
            .decrypt(cookie)
            .expect("Could not decrypt the flash cookie");

        return serde_json::from_str(cookie.value()).expect("Could not parse flash messages");
    }

    Vec::new()
}
