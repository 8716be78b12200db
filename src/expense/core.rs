//! Defines the core data model and database queries for expenses.

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::ExpenseId};

// ============================================================================
// MODELS
// ============================================================================

/// An amount of money spent on something on a given day.
///
/// To create a new `Expense`, use [Expense::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// How much was spent, always greater than zero.
    pub amount: f64,
    /// What kind of expense it was, e.g. "Food & Dining".
    pub category: String,
    /// When the money was spent.
    pub date: Date,
    /// Free text notes about the expense, may be empty.
    pub description: String,
    /// When the expense was recorded, as a SQLite `CURRENT_TIMESTAMP` string in UTC.
    pub created_at: String,
    /// When the expense was last changed, as a SQLite `CURRENT_TIMESTAMP` string in UTC.
    pub updated_at: String,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(amount: f64, category: &str, date: Date) -> ExpenseBuilder {
        ExpenseBuilder {
            amount,
            category: category.to_owned(),
            date,
            description: String::new(),
        }
    }
}

/// A builder for the user editable fields of an [Expense].
///
/// ```ignore
/// use time::macros::date;
///
/// let expense = Expense::build(250.0, "Food & Dining", date!(2024 - 03 - 05))
///     .description("Lunch with the team");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBuilder {
    /// How much was spent.
    pub amount: f64,
    /// What kind of expense it was.
    pub category: String,
    /// When the money was spent.
    pub date: Date,
    /// Free text notes about the expense.
    pub description: String,
}

impl ExpenseBuilder {
    /// Set the description for the expense.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }
}

/// Which slice of the expense list to fetch.
///
/// `offset` only applies when `limit` is set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExpensePage {
    /// The maximum number of expenses to return.
    pub limit: Option<u32>,
    /// The number of expenses to skip.
    pub offset: Option<u32>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

const EXPENSE_COLUMNS: &str = "id, amount, category, date, description, created_at, updated_at";

/// Create a new expense in the database from a builder.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn create_expense(builder: ExpenseBuilder, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(&format!(
            "INSERT INTO expense (amount, category, date, description)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {EXPENSE_COLUMNS}"
        ))?
        .query_row(
            params![
                builder.amount,
                builder.category,
                builder.date,
                builder.description
            ],
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve an expense from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expense WHERE id = :id"
        ))?
        .query_one(&[(":id", &id)], map_expense_row)?;

    Ok(expense)
}

/// Retrieve expenses, most recent first.
///
/// Expenses are ordered by date, then by when they were recorded, then by ID,
/// all descending.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_all_expenses(page: ExpensePage, connection: &Connection) -> Result<Vec<Expense>, Error> {
    // SQLite treats a negative limit as no limit.
    let (limit, offset) = match page.limit {
        Some(limit) => (i64::from(limit), i64::from(page.offset.unwrap_or(0))),
        None => (-1, 0),
    };

    connection
        .prepare(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expense
             ORDER BY date DESC, created_at DESC, id DESC
             LIMIT ?1 OFFSET ?2"
        ))?
        .query_map(params![limit, offset], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// Retrieve the expenses dated between `start` and `end` inclusive, most recent first.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_expenses_in_range(
    start: Date,
    end: Date,
    connection: &Connection,
) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expense
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date DESC, created_at DESC, id DESC"
        ))?
        .query_map(params![start, end], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// Replace the editable fields of the expense `id` and bump its `updated_at` time.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingExpense] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_expense(
    id: ExpenseId,
    builder: ExpenseBuilder,
    connection: &Connection,
) -> Result<Expense, Error> {
    connection
        .prepare(&format!(
            "UPDATE expense
             SET amount = ?1, category = ?2, date = ?3, description = ?4,
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = ?5
             RETURNING {EXPENSE_COLUMNS}"
        ))?
        .query_row(
            params![
                builder.amount,
                builder.category,
                builder.date,
                builder.description,
                id
            ],
            map_expense_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingExpense,
            error => error.into(),
        })
}

/// Delete the expense `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingExpense] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingExpense);
    }

    Ok(())
}

/// Get the total number of expenses in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_expenses(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM expense;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the expense table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
                updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date);",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_category ON expense(category);",
        (),
    )?;

    Ok(())
}

/// Map a database row to an [Expense].
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        amount: row.get(1)?,
        category: row.get(2)?,
        date: row.get(3)?,
        description: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
