//! Outlay - a personal finance tracker for the terminal
//!
//! Records income and expense transactions against a user-managed category
//! list, stores everything as JSON files under the user's config directory,
//! and derives dashboards, category breakdowns, chart series, and summary
//! statistics from the stored sequence.
//!
//! # Architecture
//!
//! - [`models`] - core data types (transactions, money, periods)
//! - [`storage`] - JSON file persistence with write-through stores
//! - [`filter`] - composable transaction filtering
//! - [`reports`] - pure aggregation over transaction sequences
//! - [`export`] - CSV and JSON export
//! - [`display`] - terminal output formatting
//! - [`cli`] - command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
