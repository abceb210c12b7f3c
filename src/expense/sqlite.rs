//! Implements a SQLite backed expense store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, params};

use crate::{
    Error,
    database_id::ExpenseId,
    expense::{
        Expense, ExpenseStore, NewExpense,
        core::{format_date, map_expense_row},
    },
};

/// Stores expenses in a SQLite database.
///
/// The `expenses` table must exist, see [initialize_db](crate::initialize_db).
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    /// Lock the connection for the duration of one statement.
    ///
    /// The lock is released when the returned guard is dropped.
    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

type RowsAffected = usize;

impl ExpenseStore for SQLiteExpenseStore {
    /// Retrieve an expense in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] there is some other SQL error.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        let expense = self
            .lock()?
            .prepare("SELECT id, payer, amount, note, date FROM expenses WHERE id = :id")?
            .query_row(&[(":id", &id)], map_expense_row)?;

        Ok(expense)
    }

    /// Retrieve a page of expenses in the order SQLite returns them.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] there is a SQL error.
    fn list(&self, offset: i64, limit: i64) -> Result<Vec<Expense>, Error> {
        self.lock()?
            .prepare("SELECT id, payer, amount, note, date FROM expenses LIMIT ?1 OFFSET ?2")?
            .query_map(params![limit, offset], map_expense_row)?
            .map(|maybe_expense| maybe_expense.map_err(Error::SqlError))
            .collect()
    }

    /// Insert a new expense and return it with the ID assigned by SQLite.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] there is a SQL error.
    fn create(&self, expense: NewExpense) -> Result<Expense, Error> {
        let date = format_date(&expense.date)?;

        let expense = self
            .lock()?
            .prepare(
                "INSERT INTO expenses (payer, amount, note, date)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, payer, amount, note, date",
            )?
            .query_row(
                params![expense.payer.as_ref(), expense.amount, expense.note, date],
                map_expense_row,
            )?;

        Ok(expense)
    }

    /// Overwrite the expense `id` with the fields in `expense`.
    ///
    /// Zero rows being affected is logged but not treated as an error.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] there is a SQL error.
    fn update(&self, id: ExpenseId, expense: NewExpense) -> Result<Expense, Error> {
        let date = format_date(&expense.date)?;

        let rows_affected: RowsAffected = self.lock()?.execute(
            "UPDATE expenses
             SET payer = ?1, amount = ?2, note = ?3, date = ?4
             WHERE id = ?5",
            params![expense.payer.as_ref(), expense.amount, expense.note, date, id],
        )?;

        if rows_affected == 0 {
            tracing::debug!("update of expense {id} affected zero rows");
        }

        Ok(expense.with_id(id))
    }

    /// Delete the expense `id`.
    ///
    /// Zero rows being affected is logged but not treated as an error.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] there is a SQL error.
    fn delete(&self, id: ExpenseId) -> Result<(), Error> {
        let rows_affected: RowsAffected = self
            .lock()?
            .execute("DELETE FROM expenses WHERE id = :id", &[(":id", &id)])?;

        if rows_affected == 0 {
            tracing::debug!("delete of expense {id} affected zero rows");
        }

        Ok(())
    }
}
