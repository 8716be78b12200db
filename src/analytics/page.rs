//! The analytics page with summary cards and spending charts.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use expense_tracker_common::format_currency;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    analytics::{
        aggregation::{Analytics, calculate_analytics},
        charts::{AnalyticsChart, build_analytics_charts, charts_script, charts_view},
    },
    endpoints,
    expense::{ExpensePage, get_all_expenses},
    flash::{FlashMessage, flash_messages_view, push_flash, take_flash},
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
};

const ECHARTS_SCRIPT: &str = "/static/echarts.6.0.0.min.js";

/// The state needed for the analytics page.
#[derive(Debug, Clone)]
pub struct AnalyticsPageState {
    /// The database connection for reading expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for AnalyticsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Read every expense and summarise it.
pub(crate) fn load_analytics(db_connection: &Mutex<Connection>) -> Result<Analytics, Error> {
    let connection = db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let expenses = get_all_expenses(ExpensePage::default(), &connection)?;

    Ok(calculate_analytics(&expenses))
}

/// Renders the analytics page.
///
/// If the expenses cannot be read, the user is sent back to the expense list
/// with an error message.
pub async fn get_analytics_page(
    State(state): State<AnalyticsPageState>,
    jar: PrivateCookieJar,
) -> Response {
    let analytics = match load_analytics(&state.db_connection) {
        Ok(analytics) => analytics,
        Err(error) => {
            tracing::error!("could not load analytics: {error}");
            let jar = push_flash(
                jar,
                FlashMessage::error(format!("Error loading analytics: {error}")),
            );
            return (jar, Redirect::to(endpoints::ROOT)).into_response();
        }
    };

    let (jar, flash_messages) = take_flash(jar);

    if analytics.expense_count == 0 {
        return (jar, analytics_no_data_view(&flash_messages)).into_response();
    }

    let charts = build_analytics_charts(&analytics);

    (jar, analytics_view(&analytics, &charts, &flash_messages)).into_response()
}

fn summary_card(id: &str, title: &str, value: &str) -> Markup {
    html! {
        div
            class="p-4 bg-white border border-gray-200 rounded-lg shadow-sm
                dark:bg-gray-800 dark:border-gray-700"
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }
            p id=(id) class="mt-1 text-2xl font-semibold" { (value) }
        }
    }
}

fn analytics_view(
    analytics: &Analytics,
    charts: &[AnalyticsChart],
    flash_messages: &[FlashMessage],
) -> Markup {
    let nav_bar = NavBar::new(endpoints::ANALYTICS_VIEW).into_html();

    let content = html!(
        (nav_bar)
        (flash_messages_view(flash_messages))

        div
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold mb-4" { "Spending Analytics" }

            section
                id="summary"
                class="grid grid-cols-2 lg:grid-cols-4 gap-4 w-full mb-6"
            {
                (summary_card("total-spending", "Total Spending", &format_currency(analytics.total_spending)))
                (summary_card("expense-count", "Expenses", &analytics.expense_count.to_string()))
                (summary_card("average-expense", "Average Expense", &format_currency(analytics.average_expense)))
                (summary_card("category-count", "Categories", &analytics.category_totals.len().to_string()))
            }

            (charts_view(charts))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        charts_script(charts),
    ];

    base("Analytics", &scripts, &content)
}

fn analytics_no_data_view(flash_messages: &[FlashMessage]) -> Markup {
    let nav_bar = NavBar::new(endpoints::ANALYTICS_VIEW).into_html();
    let new_expense_link = link(endpoints::NEW_EXPENSE_VIEW, "adding an expense");

    let content = html!(
        (nav_bar)
        (flash_messages_view(flash_messages))

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Charts will show up here once you record some expenses.
                Get started by " (new_expense_link) "."
            }
        }
    );

    base("Analytics", &[], &content)
}
