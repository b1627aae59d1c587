//! Report formatting utilities for terminal output

use crate::models::Money;
use crate::reports::{CategoryBreakdown, MonthlyPoint, Statistics, Totals};

use super::truncate;

/// Format dashboard totals
pub fn format_totals(totals: &Totals) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income:  {:>12}\n", totals.income.to_string()));
    output.push_str(&format!("Expense: {:>12}\n", totals.expense.to_string()));
    output.push_str(&"-".repeat(21));
    output.push('\n');
    output.push_str(&format!("Balance: {:>12}\n", totals.balance.to_string()));
    output
}

/// Format a category breakdown with proportional bars
pub fn format_breakdown(breakdown: &CategoryBreakdown) -> String {
    if breakdown.is_empty() {
        return "No matching transactions.\n".to_string();
    }

    let max = breakdown
        .amounts()
        .iter()
        .map(|m| m.cents())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (label, amount) in breakdown.iter() {
        output.push_str(&format!(
            "{} {:>12} {}\n",
            truncate(label, 20),
            amount.to_string(),
            format_bar(amount.cents() as f64, max as f64, 20)
        ));
    }
    output.push_str(&format!(
        "{} {:>12}\n",
        truncate("Total", 20),
        breakdown.total().to_string()
    ));
    output
}

/// Format summary statistics
pub fn format_statistics(stats: &Statistics) -> String {
    let mut output = String::new();
    output.push_str(&format!("Top category:       {}\n", stats.top_category));
    output.push_str(&format!(
        "Avg daily spending: ${:.2}\n",
        stats.avg_daily_spending
    ));
    output.push_str(&format!("Transactions:       {}\n", stats.transaction_count));
    output.push_str(&format!("Savings rate:       {:.1}%\n", stats.savings_rate));
    output
}

/// Format the 12-month income/expense series
pub fn format_monthly_series(months: &[String], series: &[MonthlyPoint]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:7} {:>12} {:>12}\n",
        "Month", "Income", "Expense"
    ));

    for (month, point) in months.iter().zip(series) {
        output.push_str(&format!(
            "{:7} {:>12} {:>12}\n",
            month,
            point.income.to_string(),
            point.expense.to_string()
        ));
    }

    output
}

/// Format the 30-day expense series, skipping zero days
pub fn format_daily_series(days: &[String], series: &[Money]) -> String {
    let max = series.iter().map(|m| m.cents()).max().unwrap_or(0);

    let mut output = String::new();
    for (day, amount) in days.iter().zip(series) {
        if amount.is_zero() {
            continue;
        }
        output.push_str(&format!(
            "{} {:>12} {}\n",
            day,
            amount.to_string(),
            format_bar(amount.cents() as f64, max as f64, 20)
        ));
    }

    if output.is_empty() {
        return "No spending in the last 30 days.\n".to_string();
    }

    output
}

/// Create a simple bar chart representation
fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return String::new();
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    "█".repeat(filled.min(width).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_totals() {
        let totals = Totals {
            income: Money::from_cents(100000),
            expense: Money::from_cents(15000),
            balance: Money::from_cents(85000),
        };

        let formatted = format_totals(&totals);
        assert!(formatted.contains("$1000.00"));
        assert!(formatted.contains("$150.00"));
        assert!(formatted.contains("$850.00"));
    }

    #[test]
    fn test_format_breakdown_empty() {
        let breakdown = CategoryBreakdown::default();
        assert!(format_breakdown(&breakdown).contains("No matching transactions"));
    }

    #[test]
    fn test_format_breakdown_has_bars_and_total() {
        let mut breakdown = CategoryBreakdown::default();
        breakdown.accumulate("Food", Money::from_cents(10000));
        breakdown.accumulate("Utilities", Money::from_cents(5000));

        let formatted = format_breakdown(&breakdown);
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("█"));
        assert!(formatted.contains("Total"));
        assert!(formatted.contains("$150.00"));
    }

    #[test]
    fn test_format_statistics() {
        let stats = Statistics {
            top_category: "Food".to_string(),
            avg_daily_spending: 150.0,
            transaction_count: 3,
            savings_rate: 85.0,
        };

        let formatted = format_statistics(&stats);
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("$150.00"));
        assert!(formatted.contains("85.0%"));
    }

    #[test]
    fn test_savings_rate_always_shows_one_decimal() {
        let stats = Statistics {
            top_category: "Food".to_string(),
            avg_daily_spending: 100.0,
            transaction_count: 2,
            savings_rate: 66.7,
        };
        assert!(format_statistics(&stats).contains("66.7%"));
    }

    #[test]
    fn test_format_bar_scales_to_max() {
        assert_eq!(format_bar(50.0, 100.0, 10).chars().count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 10), "");
    }

    #[test]
    fn test_format_daily_series_skips_zero_days() {
        let days = vec!["2024-01-01".to_string(), "2024-01-02".to_string()];
        let series = vec![Money::zero(), Money::from_cents(500)];

        let formatted = format_daily_series(&days, &series);
        assert!(!formatted.contains("2024-01-01"));
        assert!(formatted.contains("2024-01-02"));
    }
}
