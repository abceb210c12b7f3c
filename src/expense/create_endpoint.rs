//! Defines the endpoint for creating a new expense.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::expense::{ExpenseForm, ExpenseState, ExpenseStore};

/// A route handler for creating a new expense.
///
/// The body is decoded as JSON whatever the content type header says. Responds
/// with 201 and the stored expense, including its new ID, on success.
pub async fn create_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    body: Bytes,
) -> Response
where
    S: ExpenseStore + Send + Sync,
{
    let form = match ExpenseForm::from_json(&body) {
        Ok(form) => form,
        Err(error) => return error.into_response(),
    };

    let expense = form.into_new_expense(OffsetDateTime::now_utc());

    match state.expense_store.create(expense) {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(error) => error.into_response(),
    }
}
