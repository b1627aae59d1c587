//! JSON backup export

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;
use crate::storage::Storage;

/// Full backup structure
///
/// Field names are camelCase on the wire so backups stay compatible with
/// earlier exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerExport {
    /// All transactions, insertion order
    pub transactions: Vec<Transaction>,

    /// All category names, insertion order
    pub categories: Vec<String>,

    /// Export timestamp
    pub export_date: DateTime<Utc>,
}

impl TrackerExport {
    /// Snapshot the current storage contents
    pub fn from_storage(storage: &Storage) -> TrackerResult<Self> {
        Ok(Self {
            transactions: storage.transactions.list()?,
            categories: storage.categories.list()?,
            export_date: Utc::now(),
        })
    }
}

/// Export the full database to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    let export = TrackerExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
