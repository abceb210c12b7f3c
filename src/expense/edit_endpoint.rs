//! Defines the endpoint for overwriting an existing expense.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::{
    Error,
    expense::{Expense, ExpenseForm, ExpenseState, ExpenseStore, expense_id_from_path},
};

/// A route handler for updating an expense.
///
/// The ID in the path wins over any ID in the body. Updating an ID that does
/// not exist still responds with 200 and echoes the submitted expense.
pub async fn edit_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    expense_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Response
where
    S: ExpenseStore + Send + Sync,
{
    match update_expense(&state.expense_store, expense_id, &body) {
        Ok(expense) => (StatusCode::OK, Json(expense)).into_response(),
        Err(error) => error.into_response(),
    }
}

fn update_expense<S>(
    store: &S,
    expense_id: Result<Path<String>, PathRejection>,
    body: &[u8],
) -> Result<Expense, Error>
where
    S: ExpenseStore,
{
    let id = expense_id_from_path(expense_id)?;
    let expense = ExpenseForm::from_json(body)?.into_new_expense(OffsetDateTime::now_utc());

    store.update(id, expense)
}
