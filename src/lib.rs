//! Expense tracker is a web app for recording and reviewing personal expenses.
//!
//! This library provides the server: HTML pages rendered on the server, a
//! small JSON API and a health check. The pages are enhanced in the browser by
//! the `expense_tracker_frontend` WebAssembly module.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod analytics;
mod api;
mod app_state;
mod category;
mod database_id;
mod db;
mod endpoints;
mod expense;
mod flash;
mod health;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::CATEGORIES;
pub use db::initialize as initialize_db;
pub use expense::{Expense, ExpenseBuilder, create_expense, get_expenses_in_range};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{internal_server_error::InternalServerError, not_found::get_404_not_found_response};

/// Wait for Ctrl+C or SIGTERM, then give in-flight requests one second to
/// finish before `handle` stops the server.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    tokio::select! {
        received = wait_for_ctrl_c() => tracing::info!("Received {received}, shutting down."),
        received = wait_for_terminate() => tracing::info!("Received {received}, shutting down."),
    }

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}

async fn wait_for_ctrl_c() -> &'static str {
    if let Err(error) = signal::ctrl_c().await {
        tracing::error!("Could not listen for Ctrl+C: {error}");
        std::future::pending::<()>().await;
    }

    "Ctrl+C"
}

#[cfg(unix)]
async fn wait_for_terminate() -> &'static str {
    use tokio::signal::unix::{SignalKind, signal as unix_signal};

    match unix_signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            terminate.recv().await;
        }
        Err(error) => {
            tracing::error!("Could not listen for SIGTERM: {error}");
            std::future::pending::<()>().await;
        }
    }

    "SIGTERM"
}

#[cfg(not(unix))]
async fn wait_for_terminate() -> &'static str {
    std::future::pending().await
}

/// Errors from the expense store and request handlers.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// No row matched the query, e.g. an expense ID that does not exist.
    #[error("the requested resource could not be found")]
    NotFound,

    /// SQLite failed for a reason the app does not handle.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// The configured timezone is not a known IANA name.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The database mutex was poisoned by a panicking thread.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An update matched no expense.
    #[error("tried to update an expense that is not in the database")]
    UpdateMissingExpense,

    /// A delete matched no expense.
    #[error("tried to delete an expense that is not in the database")]
    DeleteMissingExpense,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("SQL error: {error}");
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "The server timezone \"{timezone}\" is not recognised. Restart the server \
                    with --timezone set to an IANA name such as Asia/Kolkata."
                ),
            }
            .into_response(),
            error => {
                tracing::error!("Unhandled error in request handler: {error}");
                InternalServerError::default().into_response()
            }
        }
    }
}
