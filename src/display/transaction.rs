//! Transaction display formatting

use crate::models::Transaction;

use super::truncate;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    let description = if txn.description.is_empty() {
        "(no description)".to_string()
    } else {
        txn.description.clone()
    };

    let amount = if txn.is_income() {
        format!("+{}", txn.amount)
    } else {
        format!("-{}", txn.amount)
    };

    format!(
        "{} {:7} {:20} {:28} {:>12}",
        txn.date.format("%Y-%m-%d"),
        txn.kind,
        truncate(&txn.category, 20),
        truncate(&description, 28),
        amount
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:7} {:20} {:28} {:>12}\n",
        "Date", "Type", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(81));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionKind};
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, description: &str) -> Transaction {
        Transaction {
            id: TransactionId::from_millis(1),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            kind,
            category: "Food & Dining".to_string(),
            description: description.to_string(),
            amount: Money::from_cents(5000),
        }
    }

    #[test]
    fn test_format_transaction_row() {
        let formatted = format_transaction_row(&txn(TransactionKind::Expense, "Lunch"));
        assert!(formatted.contains("2024-01-15"));
        assert!(formatted.contains("Food & Dining"));
        assert!(formatted.contains("Lunch"));
        assert!(formatted.contains("-$50.00"));
    }

    #[test]
    fn test_income_row_is_signed_positive() {
        let formatted = format_transaction_row(&txn(TransactionKind::Income, ""));
        assert!(formatted.contains("+$50.00"));
        assert!(formatted.contains("(no description)"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[]);
        assert!(formatted.contains("No transactions found"));
    }
}
