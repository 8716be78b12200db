//! Expense management.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and `ExpenseBuilder` for creating expenses
//! - Database functions for storing, querying, and managing expenses
//! - The expense form and the handlers for the expense pages

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod list_page;

pub use core::{
    Expense, ExpenseBuilder, ExpensePage, count_expenses, create_expense, create_expense_table,
    get_all_expenses, get_expenses_in_range,
};
pub use create_endpoint::create_expense_endpoint;
pub use create_page::get_create_expense_page;
pub use delete_endpoint::delete_expense_endpoint;
pub use edit_endpoint::edit_expense_endpoint;
pub use edit_page::get_edit_expense_page;
pub use list_page::get_expenses_page;
