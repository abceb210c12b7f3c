//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::{
    AppState, endpoints,
    expense::{
        ExpenseStore, create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_expense_endpoint, list_expenses_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: ExpenseStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::EXPENSES, get(list_expenses_endpoint::<S>))
        .route(endpoints::NEW_EXPENSE, post(create_expense_endpoint::<S>))
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint::<S>)
                .put(edit_expense_endpoint::<S>)
                .delete(delete_expense_endpoint::<S>),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' greets the client.
async fn get_index_page() -> &'static str {
    "Welcome!\n"
}

async fn get_404_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}



#[cfg(test)]
mod store_failure_tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState, PaginationConfig, SQLiteExpenseStore, build_router,
        endpoints::{self, format_endpoint},
    };

    const MISSING_TABLE: &str = "no such table: expenses";

    /// A server whose database was never initialized, so every query fails.
    fn get_uninitialized_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("could not create in-memory SQLite database");
        let store = SQLiteExpenseStore::new(Arc::new(Mutex::new(connection)));
        let state = AppState::new(store, PaginationConfig::default());

        TestServer::new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn store_errors_are_internal_server_errors_with_raw_message() {
        let server = get_uninitialized_server();
        let path = format_endpoint(endpoints::EXPENSE, 1);
        let body = r#"{"payer":"Payer","amount":1.0}"#;

        let responses = [
            server.get(endpoints::EXPENSES).await,
            server.post(endpoints::NEW_EXPENSE).text(body).await,
            server.get(&path).await,
            server.put(&path).text(body).await,
            server.delete(&path).await,
        ];

        for response in responses {
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            response.assert_json(&json!({ "error": MISSING_TABLE }));
        }
    }
}
