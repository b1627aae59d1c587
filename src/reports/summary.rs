//! Dashboard totals

use serde::Serialize;

use crate::models::{Money, Transaction};

/// Income, expense, and balance totals for a transaction sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    /// Sum of amounts where kind = income
    pub income: Money,
    /// Sum of amounts where kind = expense
    pub expense: Money,
    /// income − expense (may be negative)
    pub balance: Money,
}

/// Compute totals over a transaction sequence
///
/// Empty input yields an all-zero result.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = Money::zero();
    let mut expense = Money::zero();

    for txn in transactions {
        if txn.is_income() {
            income += txn.amount;
        } else {
            expense += txn.amount;
        }
    }

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}
