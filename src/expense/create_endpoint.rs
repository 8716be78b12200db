//! Defines the endpoint for creating a new expense.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::{Form, PrivateCookieJar};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    expense::{core::create_expense, form::ExpenseForm},
    flash::{FlashMessage, push_flash},
};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for creating a new expense.
///
/// Redirects to the expense list on success, or back to the form with the
/// reason flashed as an error.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    jar: PrivateCookieJar,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let expense = match form.into_builder() {
        Ok(expense) => expense,
        Err(error) => {
            tracing::debug!("rejected new expense: {error}");
            let jar = push_flash(jar, FlashMessage::error(error.to_string()));
            return (jar, Redirect::to(endpoints::NEW_EXPENSE_VIEW)).into_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match create_expense(expense, &connection) {
        Ok(expense) => {
            tracing::info!("created expense {}", expense.id);
            let jar = push_flash(jar, FlashMessage::success("Expense added successfully!"));
            (jar, Redirect::to(endpoints::ROOT)).into_response()
        }
        Err(error) => {
            tracing::error!("could not create expense: {error}");
            let jar = push_flash(
                jar,
                FlashMessage::error(format!("Error adding expense: {error}")),
            );
            (jar, Redirect::to(endpoints::NEW_EXPENSE_VIEW)).into_response()
        }
    }
}
