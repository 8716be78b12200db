use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{Form, PrivateCookieJar};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    endpoints::{self, format_endpoint},
    expense::{core::update_expense, form::ExpenseForm},
    flash::{FlashMessage, push_flash},
};

/// The state needed to edit an expense.
#[derive(Debug, Clone)]
pub struct EditExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for updating an expense.
///
/// Redirects to the expense list on success, or back to the edit page with
/// the reason flashed as an error.
pub async fn edit_expense_endpoint(
    State(state): State<EditExpenseState>,
    Path(expense_id): Path<ExpenseId>,
    jar: PrivateCookieJar,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let edit_page = format_endpoint(endpoints::EDIT_EXPENSE_VIEW, expense_id);

    let expense = match form.into_builder() {
        Ok(expense) => expense,
        Err(error) => {
            tracing::debug!("rejected update to expense {expense_id}: {error}");
            let jar = push_flash(jar, FlashMessage::error(error.to_string()));
            return (jar, Redirect::to(&edit_page)).into_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match update_expense(expense_id, expense, &connection) {
        Ok(_) => {
            tracing::info!("updated expense {expense_id}");
            let jar = push_flash(jar, FlashMessage::success("Expense updated successfully!"));
            (jar, Redirect::to(endpoints::ROOT)).into_response()
        }
        Err(Error::UpdateMissingExpense) => {
            tracing::error!("Could not update expense {expense_id}: expense not found");
            let jar = push_flash(jar, FlashMessage::error("Expense not found"));
            (jar, Redirect::to(endpoints::ROOT)).into_response()
        }
        Err(error) => {
            tracing::error!("Could not update expense {expense_id}: {error}");
            let jar = push_flash(
                jar,
                FlashMessage::error(format!("Error updating expense: {error}")),
            );
            (jar, Redirect::to(&edit_page)).into_response()
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum_extra::extract::Form;
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        endpoints,
        expense::{
            core::{Expense, create_expense, get_expense},
            edit_endpoint::{EditExpenseState, edit_expense_endpoint},
            form::ExpenseForm,
        },
        flash::FlashMessage,
        test_utils::{assert_redirect, get_cookie_jar, take_flash_from_response},
    };

    fn must_create_test_state() -> EditExpenseState {
        let connection =
            Connection::open_in_memory().expect("could not create in-memory SQLite database");
        initialize(&connection).expect("could not initialize test DB");

        EditExpenseState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn form(amount: &str, category: &str, date: &str) -> ExpenseForm {
        ExpenseForm {
            amount: amount.to_owned(),
            category: category.to_owned(),
            date: date.to_owned(),
            description: "foo".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_update_expense() {
        let state = must_create_test_state();
        create_expense(
            Expense::build(1.23, "Other", date!(2024 - 10 - 27)).description("test"),
            &state.db_connection.lock().unwrap(),
        )
        .expect("could not create test expense");

        let response = edit_expense_endpoint(
            State(state.clone()),
            Path(1),
            get_cookie_jar(),
            Form(form("3.21", "Shopping", "2024-10-28")),
        )
        .await;

        assert_redirect(&response, endpoints::ROOT);
        assert_eq!(
            take_flash_from_response(&response),
            vec![FlashMessage::success("Expense updated successfully!")]
        );
        let got = get_expense(1, &state.db_connection.lock().unwrap())
            .expect("could not get test expense");
        assert_eq!(got.amount, 3.21);
        assert_eq!(got.category, "Shopping");
        assert_eq!(got.date, date!(2024 - 10 - 28));
        assert_eq!(got.description, "foo");
    }

    #[tokio::test]
    async fn invalid_form_redirects_to_edit_page() {
        let state = must_create_test_state();
        create_expense(
            Expense::build(1.23, "Other", date!(2024 - 10 - 27)),
            &state.db_connection.lock().unwrap(),
        )
        .expect("could not create test expense");

        let response = edit_expense_endpoint(
            State(state.clone()),
            Path(1),
            get_cookie_jar(),
            Form(form("3.21", "", "2024-10-28")),
        )
        .await;

        assert_redirect(&response, "/expenses/1/edit");
        assert_eq!(
            take_flash_from_response(&response),
            vec![FlashMessage::error("Please select a category")]
        );
        let unchanged = get_expense(1, &state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(unchanged.amount, 1.23);
    }

    #[tokio::test]
    async fn missing_expense_redirects_to_list() {
        let response = edit_expense_endpoint(
            State(must_create_test_state()),
            Path(9),
            get_cookie_jar(),
            Form(form("3.21", "Rent", "2024-10-28")),
        )
        .await;

        assert_redirect(&response, endpoints::ROOT);
        assert_eq!(
            take_flash_from_response(&response),
            vec![FlashMessage::error("Expense not found")]
        );
    }
}
