//! Defines the route handler for the page for creating a new expense.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    expense::form::{ExpenseFormDefaults, expense_form},
    flash::{FlashMessage, flash_messages_view, take_flash},
    html::{FORM_CONTAINER_STYLE, base, rupee_input_styles},
    navigation::NavBar,
    timezone::local_today,
};

fn create_expense_view(today: Date, flash_messages: &[FlashMessage]) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_EXPENSE_VIEW).into_html();
    let form = expense_form(&ExpenseFormDefaults {
        action: endpoints::EXPENSES,
        amount: None,
        category: None,
        date: today,
        description: None,
        submit_label: "Add Expense",
    });

    let content = html! {
        (nav_bar)
        (flash_messages_view(flash_messages))

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "New Expense" }

            (form)
        }
    };

    base("Add Expense", &[rupee_input_styles()], &content)
}

/// The state needed for the create new expense page.
#[derive(Debug, Clone)]
pub struct CreateExpensePageState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for creating an expense, dated today by default.
pub async fn get_create_expense_page(
    State(state): State<CreateExpensePageState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let (jar, flash_messages) = take_flash(jar);

    Ok((jar, create_expense_view(today, &flash_messages)).into_response())
}
