//! Database schema set up.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, expense::create_expense_table};

/// Create the tables and indexes for the application.
///
/// All changes are made in a single exclusive transaction and existing tables
/// are left untouched, so this is safe to run on every start up.
///
/// # Errors
/// Returns an [Error::SqlError] if the schema could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Check that the database answers a trivial query.
pub fn test_connection(connection: &Connection) -> bool {
    connection
        .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        .inspect_err(|error| tracing::error!("database connection test failed: {error}"))
        .is_ok()
}
