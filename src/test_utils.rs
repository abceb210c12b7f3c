#![allow(missing_docs)]

use axum::{body::Body, http::Response};
use rusqlite::Connection;
use serde_json::Value;
use time::macros::datetime;

use crate::{
    NewExpense, PaginationConfig, Payer, SQLAppState, SQLiteExpenseStore, create_app_state,
    expense::{ExpenseState, ListExpensesState},
};

pub(crate) fn must_create_test_state() -> SQLAppState {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");

    create_app_state(connection, PaginationConfig::default())
        .expect("could not initialize test DB")
}

pub(crate) fn expense_state(state: &SQLAppState) -> ExpenseState<SQLiteExpenseStore> {
    ExpenseState {
        expense_store: state.expense_store.clone(),
    }
}

pub(crate) fn list_expenses_state(
    state: &SQLAppState,
) -> ListExpensesState<SQLiteExpenseStore> {
    ListExpensesState {
        expense_store: state.expense_store.clone(),
        pagination_config: state.pagination_config.clone(),
    }
}

pub(crate) fn test_expense(i: usize) -> NewExpense {
    NewExpense {
        payer: Payer::new_unchecked(&format!("Payer {i}")),
        amount: (i + 1) as f64 * 10.0,
        note: i.to_string(),
        date: datetime!(2018-01-13 20:47:48 +01:00),
    }
}

pub(crate) async fn json_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("could not read response body");

    serde_json::from_slice(&body).expect("response body is not valid JSON")
}
