//! Transaction store
//!
//! Holds the in-memory ordered transaction sequence, owns identity
//! assignment, and writes the full sequence back to transactions.json after
//! every mutation. All queries are linear scans over the insertion-ordered
//! sequence; no secondary index is maintained.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::Utc;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{NewTransaction, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// In-memory transaction sequence with write-through JSON persistence
pub struct TransactionStore {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionStore {
    /// Create a new transaction store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk, preserving stored order
    pub fn load(&self) -> TrackerResult<()> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.transactions;
        Ok(())
    }

    /// Validate a candidate, assign a fresh id, append, and persist
    ///
    /// The id is the creation timestamp in milliseconds, bumped past the
    /// newest existing id so ids stay unique and monotonic even when two
    /// transactions are created within the same millisecond.
    pub fn add(&self, candidate: NewTransaction) -> TrackerResult<Transaction> {
        candidate.validate()?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let floor = data.iter().map(|t| t.id.as_i64()).max().unwrap_or(0);
        let id = TransactionId::from_millis(Utc::now().timestamp_millis().max(floor + 1));

        let txn = Transaction {
            id,
            date: candidate.date,
            kind: candidate.kind,
            category: candidate.category.trim().to_string(),
            description: candidate.description,
            amount: candidate.amount,
        };

        data.push(txn.clone());
        self.persist(&data)?;

        Ok(txn)
    }

    /// Remove the transaction with the given id, if present
    ///
    /// Idempotent: removing an absent id is a no-op returning false. The
    /// sequence is persisted after removal.
    pub fn remove(&self, id: TransactionId) -> TrackerResult<bool> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|t| t.id != id);
        let removed = data.len() != before;

        if removed {
            self.persist(&data)?;
        }

        Ok(removed)
    }

    /// Get the full transaction sequence in insertion order
    pub fn list(&self) -> TrackerResult<Vec<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Count transactions
    pub fn count(&self) -> TrackerResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Delete all transactions and persist the empty sequence
    pub fn clear(&self) -> TrackerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        self.persist(&data)
    }

    fn persist(&self, data: &[Transaction]) -> TrackerResult<()> {
        let file_data = TransactionData {
            transactions: data.to_vec(),
        };
        write_json_atomic(&self.path, &file_data)
    }
}
