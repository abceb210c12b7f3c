//! Defines the core data models and table schema for expenses.

use std::{fmt::Display, str::FromStr};

use axum::extract::{Path, rejection::PathRejection};
use rusqlite::{Connection, Row, types::Type};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{Error, database_id::ExpenseId};

// ============================================================================
// MODELS
// ============================================================================

/// The name of the person who paid for an expense.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Payer(String);

impl Payer {
    /// Create a payer name. The name is stored exactly as given.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidPayload] if `name` is empty
    /// or only contains whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.trim().is_empty() {
            Err(Error::InvalidPayload)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a payer name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for Payer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Payer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Payer::new(s)
    }
}

impl TryFrom<String> for Payer {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Payer::new(&value)
    }
}

impl From<Payer> for String {
    fn from(value: Payer) -> Self {
        value.0
    }
}

impl Display for Payer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single ledger entry: someone paid `amount` for something at `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense, assigned by the database on creation.
    pub id: ExpenseId,
    /// Who paid.
    pub payer: Payer,
    /// How much was paid.
    ///
    /// The sign is not restricted, refunds may be recorded as negative amounts.
    pub amount: f64,
    /// What the money was spent on.
    pub note: String,
    /// When the payment happened, including the UTC offset it was recorded with.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// The fields of an expense that has not been stored yet.
///
/// Also used to overwrite the fields of an existing expense.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// Who paid.
    pub payer: Payer,
    /// How much was paid.
    pub amount: f64,
    /// What the money was spent on.
    pub note: String,
    /// When the payment happened.
    pub date: OffsetDateTime,
}

impl NewExpense {
    /// Attach `id` to the fields to create an [Expense].
    pub fn with_id(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            payer: self.payer,
            amount: self.amount,
            note: self.note,
            date: self.date,
        }
    }
}

/// The JSON body accepted when creating or updating an expense.
///
/// Any `id` in the body is ignored, the ID always comes from the database or
/// the request path.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// Who paid.
    pub payer: Payer,
    /// How much was paid.
    pub amount: f64,
    /// What the money was spent on.
    #[serde(default)]
    pub note: String,
    /// When the payment happened, defaults to the time of the request.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
}

impl ExpenseForm {
    /// Decode a request body.
    ///
    /// # Errors
    /// Returns [Error::InvalidPayload] if `body` is not a JSON object with a
    /// non-empty `payer` and a numeric `amount`.
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|error| {
            tracing::debug!("could not decode expense payload: {error}");
            Error::InvalidPayload
        })
    }

    /// Resolve the form into the fields to store, using `now` if no date was given.
    pub fn into_new_expense(self, now: OffsetDateTime) -> NewExpense {
        NewExpense {
            payer: self.payer,
            amount: self.amount,
            note: self.note,
            date: self.date.unwrap_or(now),
        }
    }
}

/// Parse an expense ID taken from a request path.
///
/// # Errors
/// Returns [Error::InvalidExpenseId] if `raw_id` is not an integer.
pub fn parse_expense_id(raw_id: &str) -> Result<ExpenseId, Error> {
    raw_id.parse().map_err(|_| Error::InvalidExpenseId)
}

/// Parse the expense ID extracted from a request path.
///
/// A path segment that axum could not extract, e.g. one that is not valid
/// UTF-8 once percent-decoded, is treated the same as a non-integer ID.
///
/// # Errors
/// Returns [Error::InvalidExpenseId] if the path could not be extracted or
/// the ID is not an integer.
pub fn expense_id_from_path(
    path: Result<Path<String>, PathRejection>,
) -> Result<ExpenseId, Error> {
    match path {
        Ok(Path(raw_id)) => parse_expense_id(&raw_id),
        Err(rejection) => {
            tracing::debug!("could not extract expense ID from path: {rejection}");
            Err(Error::InvalidExpenseId)
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the expenses table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                payer TEXT NOT NULL,
                amount REAL NOT NULL,
                note TEXT NOT NULL DEFAULT '',
                date TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT INTO sqlite_sequence (name, seq)
         SELECT 'expenses', 0
         WHERE NOT EXISTS (SELECT 1 FROM sqlite_sequence WHERE name = 'expenses')",
        (),
    )?;

    Ok(())
}

/// Format `date` the way it is stored in the database.
pub(crate) fn format_date(date: &OffsetDateTime) -> Result<String, rusqlite::Error> {
    date.format(&Rfc3339)
        .map_err(|error| rusqlite::Error::ToSqlConversionFailure(Box::new(error)))
}

/// Map a database row to an [Expense].
///
/// The row must contain the columns id, payer, amount, note and date in that order.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let payer: String = row.get(1)?;
    let amount = row.get(2)?;
    let note = row.get(3)?;
    let date: String = row.get(4)?;

    let date = OffsetDateTime::parse(&date, &Rfc3339)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(error)))?;

    Ok(Expense {
        id,
        payer: Payer::new_unchecked(&payer),
        amount,
        note,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================


#[cfg(test)]
mod parse_expense_id_tests {
    use axum::extract::Path;

    use crate::{
        Error,
        expense::{expense_id_from_path, parse_expense_id},
    };

    #[test]
    fn parses_integers() {
        assert_eq!(parse_expense_id("1"), Ok(1));
        assert_eq!(parse_expense_id("-7"), Ok(-7));
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(parse_expense_id("abc"), Err(Error::InvalidExpenseId));
        assert_eq!(parse_expense_id("1.5"), Err(Error::InvalidExpenseId));
        assert_eq!(parse_expense_id(""), Err(Error::InvalidExpenseId));
    }

    #[test]
    fn parses_extracted_path() {
        assert_eq!(expense_id_from_path(Ok(Path("12".to_owned()))), Ok(12));
        assert_eq!(
            expense_id_from_path(Ok(Path("twelve".to_owned()))),
            Err(Error::InvalidExpenseId)
        );
    }
}
