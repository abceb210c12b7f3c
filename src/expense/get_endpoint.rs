//! Defines the endpoint for fetching a single expense.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::expense::{ExpenseState, ExpenseStore, expense_id_from_path};

/// A route handler for getting an expense by its database ID.
///
/// Responds with 400 if the ID is not an integer and 404 if there is no
/// expense with that ID.
pub async fn get_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    expense_id: Result<Path<String>, PathRejection>,
) -> Response
where
    S: ExpenseStore + Send + Sync,
{
    let result = expense_id_from_path(expense_id).and_then(|id| state.expense_store.get(id));

    match result {
        Ok(expense) => (StatusCode::OK, Json(expense)).into_response(),
        Err(error) => error.into_response(),
    }
}
