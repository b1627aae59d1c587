//! Derived views over the transaction sequence
//!
//! Every function in this module is pure: it takes a transaction slice
//! (already filtered or scoped by the caller) and produces numeric or
//! grouped results. Renderers and exporters consume these results and never
//! recompute aggregation themselves.

pub mod breakdown;
pub mod series;
pub mod statistics;
pub mod summary;

pub use breakdown::{sum_by_category, CategoryBreakdown};
pub use series::{daily_expense_series, monthly_series, MonthlyPoint};
pub use statistics::{statistics, Statistics, NO_TOP_CATEGORY};
pub use summary::{totals, Totals};
