//! The slices of [AppState] needed by the expense route handlers.

use axum::extract::FromRef;

use crate::{AppState, expense::ExpenseStore, pagination::PaginationConfig};

/// The state needed to get, create, update or delete a single expense.
#[derive(Debug, Clone)]
pub struct ExpenseState<S>
where
    S: ExpenseStore + Send + Sync,
{
    /// The store for managing expenses.
    pub expense_store: S,
}

impl<S> FromRef<AppState<S>> for ExpenseState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// The state needed to list expenses a page at a time.
#[derive(Debug, Clone)]
pub struct ListExpensesState<S>
where
    S: ExpenseStore + Send + Sync,
{
    /// The store for managing expenses.
    pub expense_store: S,
    /// The limits applied to the requested page.
    pub pagination_config: PaginationConfig,
}

impl<S> FromRef<AppState<S>> for ListExpensesState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}
