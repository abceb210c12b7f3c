//! Defines the expense store trait.

use crate::{
    Error,
    database_id::ExpenseId,
    expense::{Expense, NewExpense},
};

/// Handles the persistence of [Expense]s.
///
/// Implementations are handed to the router through [AppState](crate::AppState),
/// so the HTTP layer never knows which backend it talks to.
pub trait ExpenseStore {
    /// Retrieve an expense by its `id`.
    ///
    /// # Errors
    /// Implementers must return [Error::NotFound] if no expense has the ID
    /// `id`, and a storage error for any other failure.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Retrieve up to `limit` expenses in storage order, skipping the first `offset`.
    ///
    /// An empty page is returned as an empty vector.
    fn list(&self, offset: i64, limit: i64) -> Result<Vec<Expense>, Error>;

    /// Store a new expense, returning it with its newly assigned ID.
    fn create(&self, expense: NewExpense) -> Result<Expense, Error>;

    /// Overwrite every field except the ID of the expense `id`.
    ///
    /// Updating an ID that does not exist is not an error, the returned
    /// expense simply echoes `expense` with `id`.
    fn update(&self, id: ExpenseId, expense: NewExpense) -> Result<Expense, Error>;

    /// Remove the expense `id` if it exists.
    ///
    /// Deleting an ID that does not exist is not an error.
    fn delete(&self, id: ExpenseId) -> Result<(), Error>;
}
