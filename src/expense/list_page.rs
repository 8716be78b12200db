//! The home page listing every expense.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use expense_tracker_common::{format_currency, format_display_date};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint},
    expense::core::{Expense, ExpensePage, get_all_expenses},
    flash::{FlashMessage, flash_messages_view, take_flash},
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, link,
    },
    navigation::NavBar,
};

/// The state needed for the expense list page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// The database connection for reading expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

fn expense_row(expense: &Expense) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_EXPENSE_VIEW, expense.id);
    let delete_url = format_endpoint(endpoints::DELETE_EXPENSE, expense.id);

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (format_display_date(expense.date)) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(CATEGORY_BADGE_STYLE) { (expense.category) }
            }
            td class=(TABLE_CELL_STYLE) { (expense.description) }
            td class={ (TABLE_CELL_STYLE) " text-right" } { (format_currency(expense.amount)) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    form method="post" action=(delete_url) class="inline"
                    {
                        button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                    }
                }
            }
        }
    }
}

fn expenses_view(expenses: &[Expense], flash_messages: &[FlashMessage]) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();
    let total: f64 = expenses.iter().map(|expense| expense.amount).sum();

    let content = html! {
        (nav_bar)
        (flash_messages_view(flash_messages))

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg"
            {
                div class="flex justify-between flex-wrap items-end mb-4"
                {
                    h1 class="text-xl font-bold" { "Expenses" }

                    p
                    {
                        span id="expense-count" { (expenses.len()) } " expenses, total "
                        span id="expense-total" class="font-semibold" { (format_currency(total)) }
                    }
                }

                @if expenses.is_empty() {
                    p
                    {
                        "No expenses recorded yet. "
                        (link(endpoints::NEW_EXPENSE_VIEW, "Add your first expense"))
                        "."
                    }
                } @else {
                    div class="relative overflow-x-auto shadow-md sm:rounded-lg"
                    {
                        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                    th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                                }
                            }

                            tbody
                            {
                                @for expense in expenses {
                                    (expense_row(expense))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Expenses", &[], &content)
}

/// Renders the list of all expenses, most recent first.
pub async fn get_expenses_page(
    State(state): State<ExpensesPageState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let expenses = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_all_expenses(ExpensePage::default(), &connection)
            .inspect_err(|error| tracing::error!("could not get expenses: {error}"))?
    };

    let (jar, flash_messages) = take_flash(jar);

    Ok((jar, expenses_view(&expenses, &flash_messages)).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use rusqlite::Connection;
    use scraper::Selector;
    use time::macros::date;

    use crate::{
        db::initialize,
        expense::{
            core::{Expense, create_expense},
            list_page::{ExpensesPageState, get_expenses_page},
        },
        flash::{FlashMessage, push_flash},
        test_utils::{
            assert_content_type, assert_status_ok, assert_valid_html, get_cookie_jar,
            parse_html_document,
        },
    };

    fn get_test_state() -> ExpensesPageState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        ExpensesPageState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn lists_expenses_with_count_and_total() {
        let state = get_test_state();
        {
            let conn = state.db_connection.lock().unwrap();
            create_expense(
                Expense::build(100.0, "Rent", date!(2024 - 03 - 01)).description("March"),
                &conn,
            )
            .unwrap();
            create_expense(
                Expense::build(23.5, "Food & Dining", date!(2024 - 03 - 05)),
                &conn,
            )
            .unwrap();
        }

        let response = get_expenses_page(State(state), get_cookie_jar())
            .await
            .unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let rows = document
            .select(&Selector::parse("tbody tr").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(rows.len(), 2);
        let first_row = rows[0].text().collect::<String>();
        assert!(first_row.contains("5 Mar 2024"), "got row {first_row:?}");
        assert!(first_row.contains("₹23.50"), "got row {first_row:?}");

        let total = document
            .select(&Selector::parse("#expense-total").unwrap())
            .next()
            .unwrap()
            .text()
            .collect::<String>();
        assert_eq!(total, "₹123.50");
    }

    #[tokio::test]
    async fn each_row_has_a_delete_form() {
        let state = get_test_state();
        {
            let conn = state.db_connection.lock().unwrap();
            create_expense(Expense::build(1.0, "Other", date!(2024 - 03 - 01)), &conn).unwrap();
        }

        let response = get_expenses_page(State(state), get_cookie_jar())
            .await
            .unwrap();

        let document = parse_html_document(response).await;
        let form = document
            .select(&Selector::parse("form[method=post]").unwrap())
            .next()
            .expect("no delete form found");
        assert_eq!(form.value().attr("action"), Some("/expenses/1/delete"));
    }

    #[tokio::test]
    async fn empty_list_shows_prompt() {
        let response = get_expenses_page(State(get_test_state()), get_cookie_jar())
            .await
            .unwrap();

        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert!(
            document
                .select(&Selector::parse("table").unwrap())
                .next()
                .is_none()
        );
        assert!(document.html().contains("No expenses recorded yet."));
    }

    #[tokio::test]
    async fn shows_queued_flash_messages() {
        let jar = push_flash(
            get_cookie_jar(),
            FlashMessage::success("Expense added successfully!"),
        );

        let response = get_expenses_page(State(get_test_state()), jar)
            .await
            .unwrap();

        let document = parse_html_document(response).await;
        let message = document
            .select(&Selector::parse(".flash-message").unwrap())
            .next()
            .expect("no flash message found")
            .text()
            .collect::<String>();
        assert_eq!(message.trim(), "Expense added successfully!");
    }
}
