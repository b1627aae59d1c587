//! CLI commands for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{csv, json};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export transactions to CSV
    Csv {
        /// Output file path
        output: PathBuf,
    },
    /// Export the full database (transactions and categories) to JSON
    Json {
        /// Output file path
        output: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> TrackerResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            let mut writer = create_output(&output)?;
            csv::export_transactions_csv(storage, &mut writer)?;
            finish_output(writer, &output)?;

            let count = storage.transactions.count()?;
            println!("Exported {} transactions to: {}", count, output.display());
        }

        ExportCommands::Json { output, pretty } => {
            let mut writer = create_output(&output)?;
            json::export_full_json(storage, &mut writer, pretty)?;
            finish_output(writer, &output)?;

            println!("Full database exported to: {}", output.display());
        }
    }

    Ok(())
}

fn create_output(output: &PathBuf) -> TrackerResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Flush buffered output; a failed write must error before the success
/// message is printed
fn finish_output(writer: BufWriter<File>, output: &PathBuf) -> TrackerResult<()> {
    writer.into_inner().map_err(|e| {
        TrackerError::Export(format!("Failed to write {}: {}", output.display(), e))
    })?;
    Ok(())
}
