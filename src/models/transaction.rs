//! Transaction model
//!
//! A transaction is a single dated money movement, either income or expense,
//! with a category label, an optional description, and an unsigned amount.
//! Transactions are immutable once created; the only mutation is deletion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Fixed label set for income transactions; these are never stored in the
/// category registry.
pub const INCOME_CATEGORIES: [&str; 5] =
    ["Salary", "Bonus", "Investment", "Freelance", "Other Income"];

/// Unique transaction identifier
///
/// A millisecond creation timestamp, bumped past the newest existing id when
/// two transactions land in the same millisecond. Monotonically increasing,
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Create an id from a raw millisecond timestamp value
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Get the raw id value
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TrackerError::Validation(format!(
                "Invalid transaction type '{}' (expected 'income' or 'expense')",
                other
            ))),
        }
    }
}

/// A recorded financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the store at creation
    pub id: TransactionId,

    /// Transaction date (no time component)
    pub date: NaiveDate,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Category label; sign/direction is implied by `kind`, not the label
    pub category: String,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,

    /// Unsigned amount, always positive
    pub amount: Money,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The `YYYY-MM` key of this transaction's date, used for month bucketing
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// The `YYYY-MM-DD` key of this transaction's date
    pub fn day_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Input for creating a new transaction
///
/// The id is assigned by the store, not the caller.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub amount: Money,
}

impl NewTransaction {
    /// Validate the candidate transaction
    ///
    /// The category must be non-blank and the amount positive. Membership of
    /// an expense category in the registry is enforced at the entry boundary,
    /// not here.
    pub fn validate(&self) -> TrackerResult<()> {
        if self.category.trim().is_empty() {
            return Err(TrackerError::Validation("Category is required".into()));
        }

        if !self.amount.is_positive() {
            return Err(TrackerError::Validation(
                "Amount must be a positive number".into(),
            ));
        }

        Ok(())
    }
}
