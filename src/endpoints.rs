//! Route paths for every page and API.
//!
//! Paths containing `{expense_id}` need [format_endpoint] before they are
//! used in links or redirects.

/// The expense list, which is also the landing page.
pub const ROOT: &str = "/";
/// The page for recording a new expense.
pub const NEW_EXPENSE_VIEW: &str = "/expenses/new";
/// The route that receives the new expense form.
pub const EXPENSES: &str = "/expenses";
/// The page for editing an existing expense. Form posts go to the same path.
pub const EDIT_EXPENSE_VIEW: &str = "/expenses/{expense_id}/edit";
/// The route for deleting an expense.
pub const DELETE_EXPENSE: &str = "/expenses/{expense_id}/delete";
/// The page with spending summaries and charts.
pub const ANALYTICS_VIEW: &str = "/analytics";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for listing expenses as JSON.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route for the analytics summary as JSON.
pub const ANALYTICS_API: &str = "/api/analytics";
/// The route for checking the server and database are up.
pub const HEALTH: &str = "/health";

/// Substitute `id` for the `{...}` path parameter in `endpoint_path`.
///
/// `format_endpoint(EDIT_EXPENSE_VIEW, 7)` gives "/expenses/7/edit". Paths
/// without a parameter come back unchanged. Only the first parameter is
/// replaced, and an unclosed brace swallows the rest of the path.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some((prefix, rest)) = endpoint_path.split_once('{') else {
        return endpoint_path.to_owned();
    };

    let suffix = rest.split_once('}').map_or("", |(_, suffix)| suffix);

    format!("{prefix}{id}{suffix}")
}
