//! Per-category amount breakdowns
//!
//! The breakdown is an explicit ordered mapping from category label to
//! accumulated amount. Iteration order is first-seen order over the input
//! sequence, which chart renderers rely on for stable label/value pairing.

use crate::models::{Money, Transaction, TransactionKind};

/// Ordered mapping of category label to summed amount
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    entries: Vec<(String, Money)>,
}

impl CategoryBreakdown {
    /// Accumulate an amount under a label, preserving first-seen order
    pub fn accumulate(&mut self, label: &str, amount: Money) {
        if let Some((_, sum)) = self.entries.iter_mut().find(|(l, _)| l == label) {
            *sum += amount;
        } else {
            self.entries.push((label.to_string(), amount));
        }
    }

    /// Get the summed amount for a label, if present
    pub fn get(&self, label: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, sum)| *sum)
    }

    /// Iterate over (label, amount) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.entries.iter().map(|(l, sum)| (l.as_str(), *sum))
    }

    /// Labels in first-seen order (chart axis labels)
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(l, _)| l.as_str()).collect()
    }

    /// Amounts positionally aligned with `labels()` (chart values)
    pub fn amounts(&self) -> Vec<Money> {
        self.entries.iter().map(|(_, sum)| *sum).collect()
    }

    /// Sum of all accumulated amounts
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, sum)| *sum).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sum amounts by category, restricted to the given kind
///
/// Categories with no matching transactions are absent from the result, not
/// present with zero.
pub fn sum_by_category(transactions: &[Transaction], kind: TransactionKind) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::default();

    for txn in transactions.iter().filter(|t| t.kind == kind) {
        breakdown.accumulate(&txn.category, txn.amount);
    }

    breakdown
}
