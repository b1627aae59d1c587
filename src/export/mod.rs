//! Data export
//!
//! Two formats:
//! - CSV: transaction list for spreadsheets
//! - JSON: full backup (transactions + categories + export timestamp)

pub mod csv;
pub mod json;

pub use csv::export_transactions_csv;
pub use json::{export_full_json, TrackerExport};
