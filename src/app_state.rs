//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    expense::{ExpenseStore, SQLiteExpenseStore},
    pagination::PaginationConfig,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: ExpenseStore + Send + Sync,
{
    /// The store for managing [expenses](crate::Expense).
    pub expense_store: S,
    /// The config that controls how pages of expenses are fetched.
    pub pagination_config: PaginationConfig,
}

impl<S> AppState<S>
where
    S: ExpenseStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(expense_store: S, pagination_config: PaginationConfig) -> Self {
        Self {
            expense_store,
            pagination_config,
        }
    }
}

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteExpenseStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the expenses table if
/// it does not exist yet.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(
    db_connection: Connection,
    pagination_config: PaginationConfig,
) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let expense_store = SQLiteExpenseStore::new(connection);

    Ok(AppState::new(expense_store, pagination_config))
}
