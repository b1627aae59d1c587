//! CLI command handlers
//!
//! Bridges clap argument parsing with the storage and report layers.

pub mod category;
pub mod export;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse a `YYYY-MM` argument into a normalized zero-padded month key
///
/// chrono accepts unpadded months, so the result is re-formatted rather than
/// echoed; otherwise "2024-1" would never match a stored month key.
pub(crate) fn parse_month(s: &str) -> TrackerResult<String> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m").to_string())
        .map_err(|_| {
            TrackerError::Validation(format!("Invalid month format: '{}'. Use YYYY-MM", s))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-01-05").is_ok());
        assert!(parse_date("01/05/2024").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-01").unwrap(), "2024-01");
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("2024").is_err());
    }

    #[test]
    fn test_parse_month_pads_unpadded_input() {
        // Must match Transaction::month_key, which is always zero-padded
        assert_eq!(parse_month("2024-1").unwrap(), "2024-01");
    }
}
