//! Transaction filtering
//!
//! A filter is a set of independently optional predicates combined with
//! logical AND. Applying a filter is a pure, stable operation: the output
//! preserves the relative order of the input. Sorting for display is a
//! separate presentation step layered on top.
//!
//! The date range predicates (`date_from`/`date_to`) are used by the
//! transaction list; the `month` predicate is used by the dashboard. Callers
//! never combine the two modes in one filter.

use chrono::NaiveDate;

use crate::models::{Transaction, TransactionKind};

/// Optional predicates narrowing a transaction sequence to a view
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring match against description OR category
    pub search: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    /// Exact kind match
    pub kind: Option<TransactionKind>,
    /// Inclusive lower date bound
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub date_to: Option<NaiveDate>,
    /// Exact match on the `YYYY-MM` key of the date
    pub month: Option<String>,
}

impl TransactionFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by search text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Filter by exact category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// Filter by `YYYY-MM` month key
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// Check whether a single transaction matches all supplied predicates
    ///
    /// An absent or empty predicate matches everything.
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !needle.is_empty()
                && !txn.description.to_lowercase().contains(&needle)
                && !txn.category.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !category.is_empty() && txn.category != *category {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        if let Some(from) = self.date_from {
            if txn.date < from {
                return false;
            }
        }

        if let Some(to) = self.date_to {
            if txn.date > to {
                return false;
            }
        }

        if let Some(month) = &self.month {
            if !month.is_empty() && txn.month_key() != *month {
                return false;
            }
        }

        true
    }

    /// Apply the filter, preserving relative order (stable)
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}

/// Sort transactions descending by date, ties keeping their original
/// relative order
///
/// Presentation-layer step used by the transaction list; not part of the
/// filter contract.
pub fn sort_by_date_descending(transactions: &mut [Transaction]) {
    // sort_by is stable, so same-date entries keep insertion order
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId};
    use chrono::NaiveDate;

    fn txn(
        id: i64,
        date: &str,
        kind: TransactionKind,
        category: &str,
        description: &str,
        cents: i64,
    ) -> Transaction {
        Transaction {
            id: TransactionId::from_millis(id),
            date: date.parse::<NaiveDate>().unwrap(),
            kind,
            category: category.to_string(),
            description: description.to_string(),
            amount: Money::from_cents(cents),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(1, "2024-01-05", TransactionKind::Expense, "Food & Dining", "Lunch with team", 10000),
            txn(2, "2024-01-05", TransactionKind::Expense, "Transportation", "Bus pass", 5000),
            txn(3, "2024-01-06", TransactionKind::Income, "Salary", "January pay", 100000),
            txn(4, "2024-02-10", TransactionKind::Expense, "Food & Dining", "Groceries", 3000),
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let txns = sample();
        let filtered = TransactionFilter::new().apply(&txns);
        assert_eq!(filtered, txns);
    }

    #[test]
    fn test_search_is_case_insensitive_over_description_and_category() {
        let txns = sample();

        let by_description = TransactionFilter::new().search("LUNCH").apply(&txns);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].description, "Lunch with team");

        let by_category = TransactionFilter::new().search("food").apply(&txns);
        assert_eq!(by_category.len(), 2);
    }

    #[test]
    fn test_category_is_exact_match() {
        let txns = sample();
        let filtered = TransactionFilter::new().category("Food & Dining").apply(&txns);
        assert_eq!(filtered.len(), 2);

        let none = TransactionFilter::new().category("Food").apply(&txns);
        assert!(none.is_empty());
    }

    #[test]
    fn test_kind_filter() {
        let txns = sample();
        let incomes = TransactionFilter::new()
            .kind(TransactionKind::Income)
            .apply(&txns);
        assert_eq!(incomes.len(), 1);
        assert_eq!(incomes[0].category, "Salary");
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let txns = sample();
        let from = "2024-01-05".parse::<NaiveDate>().ok();
        let to = "2024-01-06".parse::<NaiveDate>().ok();

        let filtered = TransactionFilter::new().date_range(from, to).apply(&txns);
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_month_filter() {
        let txns = sample();
        let filtered = TransactionFilter::new().month("2024-01").apply(&txns);
        assert_eq!(filtered.len(), 3);

        let feb = TransactionFilter::new().month("2024-02").apply(&txns);
        assert_eq!(feb.len(), 1);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let txns = sample();
        let filtered = TransactionFilter::new()
            .search("food")
            .kind(TransactionKind::Expense)
            .month("2024-01")
            .apply(&txns);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Lunch with team");
    }

    #[test]
    fn test_filtering_is_stable_and_idempotent() {
        let txns = sample();
        let filter = TransactionFilter::new().kind(TransactionKind::Expense);

        let once = filter.apply(&txns);
        // Relative input order preserved
        assert!(once.windows(2).all(|w| w[0].id < w[1].id));

        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_by_date_descending_is_stable() {
        let mut txns = sample();
        sort_by_date_descending(&mut txns);

        assert_eq!(txns[0].date, "2024-02-10".parse::<NaiveDate>().unwrap());
        // The two 2024-01-05 entries keep insertion order
        let jan5: Vec<_> = txns
            .iter()
            .filter(|t| t.day_key() == "2024-01-05")
            .map(|t| t.id.as_i64())
            .collect();
        assert_eq!(jan5, vec![1, 2]);
    }
}
