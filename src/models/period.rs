//! Canonical period sequences for chart aggregation
//!
//! Both generators take an injected reference date instead of reading the
//! system clock, so chart buckets are deterministic and testable.

use chrono::{Datelike, Duration, NaiveDate};

/// The 12 `YYYY-MM` month keys ending at the month containing `reference`,
/// oldest first.
pub fn last_12_months(reference: NaiveDate) -> Vec<String> {
    let mut year = reference.year();
    let mut month = reference.month();

    let mut months = Vec::with_capacity(12);
    for _ in 0..12 {
        months.push(format!("{:04}-{:02}", year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }

    months.reverse();
    months
}

/// The 30 `YYYY-MM-DD` day keys from 29 days before `reference` through
/// `reference` inclusive, oldest first.
pub fn last_30_days(reference: NaiveDate) -> Vec<String> {
    (0..30)
        .rev()
        .map(|offset| (reference - Duration::days(offset)).format("%Y-%m-%d").to_string())
        .collect()
}
