use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    endpoints::{self, format_endpoint},
    expense::{
        core::{Expense, get_expense},
        form::{ExpenseFormDefaults, expense_form},
    },
    flash::{FlashMessage, flash_messages_view, push_flash, take_flash},
    html::{FORM_CONTAINER_STYLE, LINK_STYLE, base, rupee_input_styles},
    navigation::NavBar,
};

fn edit_expense_view(expense: &Expense, flash_messages: &[FlashMessage]) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_EXPENSE_VIEW).into_html();
    let action = format_endpoint(endpoints::EDIT_EXPENSE_VIEW, expense.id);
    let form = expense_form(&ExpenseFormDefaults::from_expense(expense, &action));

    let content = html! {
        (nav_bar)
        (flash_messages_view(flash_messages))

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "Edit Expense" }

            (form)

            a href=(endpoints::ROOT) class={ (LINK_STYLE) " mt-4" } { "Cancel" }
        }
    };

    base("Edit Expense", &[rupee_input_styles()], &content)
}

/// The state needed for the edit expense page.
#[derive(Debug, Clone)]
pub struct EditExpensePageState {
    /// The database connection for reading the expense.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Renders the page for editing an expense.
///
/// Redirects to the expense list with an error message if the expense does
/// not exist.
pub async fn get_edit_expense_page(
    State(state): State<EditExpensePageState>,
    Path(expense_id): Path<ExpenseId>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let expense = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_expense(expense_id, &connection)
    };

    let expense = match expense {
        Ok(expense) => expense,
        Err(Error::NotFound) => {
            tracing::debug!("tried to edit missing expense {expense_id}");
            let jar = push_flash(jar, FlashMessage::error("Expense not found"));
            return Ok((jar, Redirect::to(endpoints::ROOT)).into_response());
        }
        Err(error) => {
            tracing::error!("Failed to retrieve expense {expense_id}: {error}");
            return Err(error);
        }
    };

    let (jar, flash_messages) = take_flash(jar);

    Ok((jar, edit_expense_view(&expense, &flash_messages)).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        endpoints,
        expense::{
            core::{Expense, create_expense},
            edit_page::{EditExpensePageState, get_edit_expense_page},
        },
        flash::FlashMessage,
        test_utils::{
            assert_form_input_with_value, assert_form_submit_button_with_text, assert_redirect,
            assert_status_ok, assert_valid_html, get_cookie_jar, must_get_form,
            parse_html_document, take_flash_from_response,
        },
    };

    fn get_test_state() -> EditExpensePageState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        EditExpensePageState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn shows_form_filled_with_expense() {
        let state = get_test_state();
        {
            let conn = state.db_connection.lock().unwrap();
            create_expense(
                Expense::build(99.5, "Utilities", date!(2024 - 02 - 10)).description("Power"),
                &conn,
            )
            .unwrap();
        }

        let response = get_edit_expense_page(State(state), Path(1), get_cookie_jar())
            .await
            .unwrap();

        assert_status_ok(&response);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let form = must_get_form(&document);
        assert_eq!(form.value().attr("action"), Some("/expenses/1/edit"));
        assert_form_input_with_value(&form, "amount", "number", "99.50");
        assert_form_input_with_value(&form, "date", "date", "2024-02-10");
        assert_form_submit_button_with_text(&form, "Update Expense");
    }

    #[tokio::test]
    async fn sub_cent_amount_is_not_rounded() {
        let state = get_test_state();
        {
            let conn = state.db_connection.lock().unwrap();
            create_expense(Expense::build(10.125, "Rent", date!(2024 - 02 - 10)), &conn).unwrap();
        }

        let response = get_edit_expense_page(State(state), Path(1), get_cookie_jar())
            .await
            .unwrap();

        let document = parse_html_document(response).await;
        let form = must_get_form(&document);
        assert_form_input_with_value(&form, "amount", "number", "10.125");
        let amount = form
            .select(&scraper::Selector::parse("input[name=amount]").unwrap())
            .next()
            .unwrap();
        assert_eq!(amount.value().attr("step"), Some("any"));
    }

    #[tokio::test]
    async fn missing_expense_redirects_with_message() {
        let response = get_edit_expense_page(State(get_test_state()), Path(42), get_cookie_jar())
            .await
            .unwrap();

        assert_redirect(&response, endpoints::ROOT);
        assert_eq!(
            take_flash_from_response(&response),
            vec![FlashMessage::error("Expense not found")]
        );
    }
}
