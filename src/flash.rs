//! One-shot notifications that survive a redirect.
//!
//! A handler queues a [FlashMessage] in an encrypted cookie before it
//! redirects, and the next page takes the queued messages out of the cookie
//! and renders them. The browser enhancements dismiss rendered messages after
//! a few seconds.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use expense_tracker_common::markup::FLASH_MESSAGE_CLASS;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// The name of the cookie holding queued flash messages.
pub const FLASH_COOKIE: &str = "flash";

/// Whether a flash message reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    fn css_class(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }

    fn style(self) -> &'static str {
        match self {
            FlashKind::Success => {
                "text-green-800 bg-green-50 border-green-300 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800"
            }
            FlashKind::Error => {
                "text-red-800 bg-red-50 border-red-300 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

fn read_messages(jar: &PrivateCookieJar) -> Vec<FlashMessage> {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return Vec::new();
    };

    serde_json::from_str(cookie.value())
        .inspect_err(|error| tracing::warn!("discarding unreadable flash cookie: {error}"))
        .unwrap_or_default()
}

/// Queue `message` to be shown on the next rendered page.
pub fn push_flash(jar: PrivateCookieJar, message: FlashMessage) -> PrivateCookieJar {
    let mut messages = read_messages(&jar);
    messages.push(message);

    match serde_json::to_string(&messages) {
        Ok(value) => jar.add(
            Cookie::build((FLASH_COOKIE, value))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax),
        ),
        Err(error) => {
            tracing::error!("could not serialize flash messages: {error}");
            jar
        }
    }
}

/// Take every queued message out of `jar`, removing the cookie.
pub fn take_flash(jar: PrivateCookieJar) -> (PrivateCookieJar, Vec<FlashMessage>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }

    let messages = read_messages(&jar);
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));

    (jar, messages)
}

/// Render `messages` as banners that the browser dismisses on its own.
pub fn flash_messages_view(messages: &[FlashMessage]) -> Markup {
    html! {
        @if !messages.is_empty() {
            div
                id="flash-messages"
                class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-full max-w-sm"
            {
                @for message in messages {
                    div
                        class={
                            (FLASH_MESSAGE_CLASS) " " (message.kind.css_class())
                            " p-4 text-sm border rounded-lg shadow " (message.kind.style())
                        }
                        role="alert"
                    {
                        (message.message)
                    }
                }
            }
        }
    }
}
