//! Storage layer for Outlay
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Every mutating store operation writes the full sequence back to
//! disk synchronously; there is no batching and no transactionality across
//! the two stores.

pub mod categories;
pub mod file_io;
pub mod transactions;

pub use categories::{CategoryRegistry, DEFAULT_CATEGORIES};
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionStore;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Main storage coordinator providing access to both stores
///
/// Constructed once at process start and passed by reference to all
/// consumers; there is no module-level singleton.
pub struct Storage {
    paths: TrackerPaths,
    pub transactions: TransactionStore,
    pub categories: CategoryRegistry,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::new(paths.transactions_file()),
            categories: CategoryRegistry::new(paths.categories_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TrackerError> {
        self.transactions.load()?;
        self.categories.load()?;
        Ok(())
    }
}
