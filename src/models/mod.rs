//! Core data models for Outlay

pub mod money;
pub mod period;
pub mod transaction;

pub use money::Money;
pub use period::{last_12_months, last_30_days};
pub use transaction::{
    NewTransaction, Transaction, TransactionId, TransactionKind, INCOME_CATEGORIES,
};
