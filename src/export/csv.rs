//! CSV export
//!
//! Writes the transaction list with every field quoted, in stored
//! (insertion) order.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::error::TrackerResult;
use crate::storage::Storage;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> TrackerResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(["Date", "Type", "Category", "Description", "Amount"])?;

    for txn in storage.transactions.list()? {
        csv_writer.write_record([
            txn.date.to_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            txn.description.clone(),
            format!("{:.2}", txn.amount.as_f64()),
        ])?;
    }

    csv_writer.flush().map_err(crate::error::TrackerError::from)?;

    Ok(())
}
