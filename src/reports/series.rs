//! Date-bucketed chart series
//!
//! Both series are positionally aligned with the period list passed in
//! (normally `last_12_months` / `last_30_days` output), so renderers can zip
//! labels and values directly.

use serde::Serialize;

use crate::models::{Money, Transaction};
use crate::reports::summary::totals;

/// One month's income/expense pair in the monthly series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthlyPoint {
    pub income: Money,
    pub expense: Money,
}

/// Income/expense totals per month, aligned with `months`
///
/// Each entry recomputes totals over the transactions whose date falls in
/// that `YYYY-MM` month.
pub fn monthly_series(months: &[String], transactions: &[Transaction]) -> Vec<MonthlyPoint> {
    months
        .iter()
        .map(|month| {
            let in_month: Vec<Transaction> = transactions
                .iter()
                .filter(|t| t.month_key() == *month)
                .cloned()
                .collect();
            let t = totals(&in_month);
            MonthlyPoint {
                income: t.income,
                expense: t.expense,
            }
        })
        .collect()
}

/// Summed expense amount per day, aligned with `days`
///
/// Each entry sums expense amounts whose date exactly equals that
/// `YYYY-MM-DD` day; zero when none.
pub fn daily_expense_series(days: &[String], transactions: &[Transaction]) -> Vec<Money> {
    days.iter()
        .map(|day| {
            transactions
                .iter()
                .filter(|t| t.is_expense() && t.day_key() == *day)
                .map(|t| t.amount)
                .sum()
        })
        .collect()
}
