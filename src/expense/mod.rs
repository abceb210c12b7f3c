//! Expense management for the ledger.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and the JSON form used to create and update expenses
//! - The `ExpenseStore` trait and its SQLite implementation
//! - The route handlers for the expense endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;
mod sqlite;
mod state;
mod store;

pub use self::core::{
    Expense, ExpenseForm, NewExpense, Payer, create_expense_table, expense_id_from_path,
    parse_expense_id,
};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use edit_endpoint::edit_expense_endpoint;
pub use get_endpoint::get_expense_endpoint;
pub use list_endpoint::list_expenses_endpoint;
pub use sqlite::SQLiteExpenseStore;
pub use state::{ExpenseState, ListExpensesState};
pub use store::ExpenseStore;
