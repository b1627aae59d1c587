//! Display formatting for terminal output

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use report::{
    format_breakdown, format_daily_series, format_monthly_series, format_statistics,
    format_totals,
};
pub use transaction::{format_transaction_register, format_transaction_row};

/// Truncate a string to a maximum length, padding short ones
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
