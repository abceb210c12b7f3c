//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/expense/{expense_id}', use [format_endpoint].

/// The root route which greets the client.
pub const ROOT: &str = "/";
/// The route for listing expenses a page at a time.
pub const EXPENSES: &str = "/expenses";
/// The route for creating an expense.
pub const NEW_EXPENSE: &str = "/expense";
/// The route to get, update or delete a single expense.
pub const EXPENSE: &str = "/expense/{expense_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/expense/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
