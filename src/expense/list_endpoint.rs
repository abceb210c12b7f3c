//! Defines the endpoint for listing expenses a page at a time.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    expense::{ExpenseStore, ListExpensesState},
    pagination::{Page, PageQuery},
};

/// A route handler for listing expenses.
///
/// The query parameters `start` and `count` select the page, see
/// [Page::from_query] for how out of range values are handled. Always
/// responds with a JSON array unless the store fails.
///
/// The query string is taken as a list of pairs so that repeated keys do not
/// reject the request.
pub async fn list_expenses_endpoint<S>(
    State(state): State<ListExpensesState<S>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response
where
    S: ExpenseStore + Send + Sync,
{
    let query = PageQuery::from_pairs(pairs);
    let page = Page::from_query(&query, &state.pagination_config);

    match state.expense_store.list(page.offset, page.limit) {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::to_bytes,
        extract::{Query, State},
        http::StatusCode,
    };
    use serde_json::Value;

    use crate::{
        expense::{ExpenseStore, list_endpoint::list_expenses_endpoint},
        test_utils::{json_body, list_expenses_state, must_create_test_state, test_expense},
    };

    fn query(start: Option<&str>, count: Option<&str>) -> Query<Vec<(String, String)>> {
        let pairs = [("start", start), ("count", count)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key.to_owned(), value.to_owned())))
            .collect();

        Query(pairs)
    }

    #[tokio::test]
    async fn empty_table_gives_empty_array() {
        let state = must_create_test_state();

        let response =
            list_expenses_endpoint(State(list_expenses_state(&state)), query(None, None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn returns_requested_page() {
        let state = must_create_test_state();
        for i in 0..5 {
            state.expense_store.create(test_expense(i)).unwrap();
        }

        let response = list_expenses_endpoint(
            State(list_expenses_state(&state)),
            query(Some("1"), Some("2")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let ids: Vec<_> = body
            .as_array()
            .expect("want JSON array")
            .iter()
            .map(|expense| expense["id"].clone())
            .collect();
        assert_eq!(ids, vec![Value::from(2), Value::from(3)]);
    }

    #[tokio::test]
    async fn count_is_clamped_to_one_hundred() {
        let state = must_create_test_state();
        for i in 0..120 {
            state.expense_store.create(test_expense(i)).unwrap();
        }

        let response = list_expenses_endpoint(
            State(list_expenses_state(&state)),
            query(None, Some("500")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(100));
    }

    #[tokio::test]
    async fn invalid_parameters_fall_back_to_defaults() {
        let state = must_create_test_state();
        for i in 0..3 {
            state.expense_store.create(test_expense(i)).unwrap();
        }

        let response = list_expenses_endpoint(
            State(list_expenses_state(&state)),
            query(Some("-10"), Some("lots")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn repeated_count_uses_first_value() {
        let state = must_create_test_state();
        for i in 0..10 {
            state.expense_store.create(test_expense(i)).unwrap();
        }
        let pairs = vec![
            ("count".to_owned(), "5".to_owned()),
            ("count".to_owned(), "6".to_owned()),
        ];

        let response =
            list_expenses_endpoint(State(list_expenses_state(&state)), Query(pairs)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(5));
    }
}
