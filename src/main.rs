use anyhow::Result;
use clap::{Parser, Subcommand};

use outlay::cli::{
    handle_category_command, handle_export_command, handle_report_command,
    handle_transaction_command, CategoryCommands, ExportCommands, ReportCommands,
    TransactionCommands,
};
use outlay::config::TrackerPaths;
use outlay::storage::Storage;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "Outlay tracks income and expenses from the command line. \
                  Transactions are stored locally as JSON and summarized into \
                  dashboards, category breakdowns, and spending statistics."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Reports and statistics
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to CSV or JSON
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Outlay Configuration");
            println!("====================");
            println!("Data directory:    {}", storage.paths().data_dir().display());
            println!(
                "Transactions file: {}",
                storage.paths().transactions_file().display()
            );
            println!(
                "Categories file:   {}",
                storage.paths().categories_file().display()
            );
        }
        None => {
            println!("Outlay - Terminal-based personal finance tracker");
            println!();
            println!("Run 'outlay --help' for usage information.");
        }
    }

    Ok(())
}
