//! JSON endpoints for reading expenses and analytics.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde_json::json;

use crate::{
    AppState, Error,
    analytics::load_analytics,
    expense::{ExpensePage, get_all_expenses},
};

/// The state needed for the JSON API.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// The database connection for reading expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// An error reported to API clients as `{"error": "<message>"}`.
struct ApiError(Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// List expenses, newest first, optionally paged with `limit` and `offset`.
pub async fn get_expenses_json(
    State(state): State<ApiState>,
    Query(page): Query<ExpensePage>,
) -> Response {
    let expenses = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)
        .and_then(|connection| get_all_expenses(page, &connection));

    match expenses {
        Ok(expenses) => Json(expenses).into_response(),
        Err(error) => {
            tracing::error!("could not list expenses: {error}");
            ApiError(error).into_response()
        }
    }
}

/// Summarise all expenses.
pub async fn get_analytics_json(State(state): State<ApiState>) -> Response {
    match load_analytics(&state.db_connection) {
        Ok(analytics) => Json(analytics).into_response(),
        Err(error) => {
            tracing::error!("could not calculate analytics: {error}");
            ApiError(error).into_response()
        }
    }
}
