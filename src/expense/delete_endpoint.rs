//! Defines the endpoint for deleting an expense.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::expense::{ExpenseState, ExpenseStore, expense_id_from_path};

/// A route handler for deleting an expense, responds with `{"result": "success"}`.
///
/// Deleting an ID that does not exist is also a success.
pub async fn delete_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    expense_id: Result<Path<String>, PathRejection>,
) -> Response
where
    S: ExpenseStore + Send + Sync,
{
    let id = match expense_id_from_path(expense_id) {
        Ok(id) => id,
        Err(error) => return error.into_response(),
    };

    match state.expense_store.delete(id) {
        Ok(()) => (StatusCode::OK, Json(json!({ "result": "success" }))).into_response(),
        Err(error) => error.into_response(),
    }
}
