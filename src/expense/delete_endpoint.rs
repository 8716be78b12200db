use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use rusqlite::Connection;

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    endpoints,
    expense::core::delete_expense,
    flash::{FlashMessage, push_flash},
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The database connection for managing expenses.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting an expense, flashes the outcome and redirects
/// to the expense list.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
    jar: PrivateCookieJar,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let message = match delete_expense(expense_id, &connection) {
        Ok(()) => {
            tracing::info!("deleted expense {expense_id}");
            FlashMessage::success("Expense deleted successfully!")
        }
        Err(Error::DeleteMissingExpense) => {
            tracing::debug!("tried to delete missing expense {expense_id}");
            FlashMessage::error("Expense not found")
        }
        Err(error) => {
            tracing::error!("Could not delete expense {expense_id}: {error}");
            FlashMessage::error(format!("Error deleting expense: {error}"))
        }
    };

    (push_flash(jar, message), Redirect::to(endpoints::ROOT)).into_response()
}
