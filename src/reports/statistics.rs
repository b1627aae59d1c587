//! Summary statistics
//!
//! Computed over the full (unfiltered) transaction sequence for the
//! analytics view.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Transaction, TransactionKind};
use crate::reports::breakdown::sum_by_category;
use crate::reports::summary::totals;

/// Sentinel shown when there are no expense transactions
pub const NO_TOP_CATEGORY: &str = "—";

/// Summary statistics over a transaction sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Category with the maximum summed expense amount, or the sentinel
    pub top_category: String,
    /// Total expense divided by the number of distinct expense dates
    pub avg_daily_spending: f64,
    /// Count of all transactions, income and expense
    pub transaction_count: usize,
    /// (1 − expense/income) × 100, rounded to one decimal; 0 when income is 0
    pub savings_rate: f64,
}

/// Compute summary statistics
pub fn statistics(transactions: &[Transaction]) -> Statistics {
    let t = totals(transactions);

    // Tie-break: the first category (in first-seen order) reaching the
    // maximum wins.
    let breakdown = sum_by_category(transactions, TransactionKind::Expense);
    let mut top_category = NO_TOP_CATEGORY.to_string();
    let mut top_amount = None;
    for (label, amount) in breakdown.iter() {
        if top_amount.map_or(true, |max| amount > max) {
            top_amount = Some(amount);
            top_category = label.to_string();
        }
    }

    // Distinct dates with at least one expense, not calendar days in range;
    // denominator defaults to 1 so an empty expense set yields 0.
    let expense_days: HashSet<_> = transactions
        .iter()
        .filter(|txn| txn.is_expense())
        .map(|txn| txn.date)
        .collect();
    let days = expense_days.len().max(1);
    let avg_daily_spending = t.expense.as_f64() / days as f64;

    // 0 when income is 0, even with positive expenses (known degenerate
    // case, preserved deliberately).
    let savings_rate = if t.income.is_positive() {
        let rate = (1.0 - t.expense.cents() as f64 / t.income.cents() as f64) * 100.0;
        (rate * 10.0).round() / 10.0
    } else {
        0.0
    };

    Statistics {
        top_category,
        avg_daily_spending,
        transaction_count: transactions.len(),
        savings_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId};
    use chrono::NaiveDate;

    fn txn(id: i64, date: &str, kind: TransactionKind, category: &str, cents: i64) -> Transaction {
        Transaction {
            id: TransactionId::from_millis(id),
            date: date.parse::<NaiveDate>().unwrap(),
            kind,
            category: category.to_string(),
            description: String::new(),
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_worked_example() {
        let txns = vec![
            txn(1, "2024-01-05", TransactionKind::Expense, "Food", 10000),
            txn(2, "2024-01-05", TransactionKind::Expense, "Food", 5000),
            txn(3, "2024-01-06", TransactionKind::Income, "Salary", 100000),
        ];

        let stats = statistics(&txns);
        assert_eq!(stats.top_category, "Food");
        assert_eq!(stats.avg_daily_spending, 150.0);
        assert_eq!(stats.transaction_count, 3);
        assert_eq!(stats.savings_rate, 85.0);
    }

    #[test]
    fn test_empty_input() {
        let stats = statistics(&[]);
        assert_eq!(stats.top_category, NO_TOP_CATEGORY);
        assert_eq!(stats.avg_daily_spending, 0.0);
        assert_eq!(stats.transaction_count, 0);
        assert_eq!(stats.savings_rate, 0.0);
    }

    #[test]
    fn test_top_category_tie_break_is_first_seen() {
        let txns = vec![
            txn(1, "2024-01-05", TransactionKind::Expense, "Utilities", 5000),
            txn(2, "2024-01-06", TransactionKind::Expense, "Shopping", 5000),
        ];
        assert_eq!(statistics(&txns).top_category, "Utilities");
    }

    #[test]
    fn test_avg_daily_spending_uses_distinct_expense_dates() {
        let txns = vec![
            txn(1, "2024-01-05", TransactionKind::Expense, "Food", 10000),
            txn(2, "2024-01-05", TransactionKind::Expense, "Food", 2000),
            txn(3, "2024-01-09", TransactionKind::Expense, "Food", 3000),
            // Income dates do not count as spending days
            txn(4, "2024-01-10", TransactionKind::Income, "Salary", 50000),
        ];

        // 150.00 over 2 distinct expense dates
        assert_eq!(statistics(&txns).avg_daily_spending, 75.0);
    }

    #[test]
    fn test_avg_daily_spending_zero_without_expenses() {
        let txns = vec![txn(1, "2024-01-06", TransactionKind::Income, "Salary", 100000)];
        assert_eq!(statistics(&txns).avg_daily_spending, 0.0);
    }

    #[test]
    fn test_savings_rate_zero_when_income_is_zero() {
        let txns = vec![txn(1, "2024-01-05", TransactionKind::Expense, "Food", 99900)];
        assert_eq!(statistics(&txns).savings_rate, 0.0);
    }

    #[test]
    fn test_savings_rate_rounds_to_one_decimal() {
        let txns = vec![
            txn(1, "2024-01-06", TransactionKind::Income, "Salary", 30000),
            txn(2, "2024-01-05", TransactionKind::Expense, "Food", 10000),
        ];
        // 1 - 1/3 = 66.666...% -> 66.7
        assert_eq!(statistics(&txns).savings_rate, 66.7);
    }

    #[test]
    fn test_savings_rate_negative_when_overspending() {
        let txns = vec![
            txn(1, "2024-01-06", TransactionKind::Income, "Salary", 10000),
            txn(2, "2024-01-05", TransactionKind::Expense, "Food", 15000),
        ];
        assert_eq!(statistics(&txns).savings_rate, -50.0);
    }

    #[test]
    fn test_transaction_count_includes_both_kinds() {
        let txns = vec![
            txn(1, "2024-01-06", TransactionKind::Income, "Salary", 10000),
            txn(2, "2024-01-05", TransactionKind::Expense, "Food", 5000),
        ];
        assert_eq!(statistics(&txns).transaction_count, 2);
    }
}
