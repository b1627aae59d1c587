//! Report CLI commands

use clap::Subcommand;

use crate::display::{
    format_breakdown, format_daily_series, format_monthly_series, format_statistics,
    format_totals,
};
use crate::error::TrackerResult;
use crate::filter::TransactionFilter;
use crate::models::{last_12_months, last_30_days, TransactionKind};
use crate::reports::{daily_expense_series, monthly_series, statistics, sum_by_category, totals};
use crate::storage::Storage;

use super::parse_month;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show income, expense, and balance for a month
    Dashboard {
        /// Month to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show summary statistics over all transactions
    Stats,
    /// Show income and expense totals for the last 12 months
    Monthly,
    /// Show daily spending for the last 30 days
    Daily,
    /// Show per-category totals
    Categories {
        /// Transaction type to total (income or expense)
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> TrackerResult<()> {
    let transactions = storage.transactions.list()?;

    match cmd {
        ReportCommands::Dashboard { month } => {
            let month = match month {
                Some(m) => parse_month(&m)?,
                None => chrono::Local::now().format("%Y-%m").to_string(),
            };

            let in_month = TransactionFilter::new().month(month.clone()).apply(&transactions);

            println!("Dashboard for {}\n", month);
            print!("{}", format_totals(&totals(&in_month)));

            let breakdown = sum_by_category(&in_month, TransactionKind::Expense);
            println!("\nSpending by category:");
            print!("{}", format_breakdown(&breakdown));
        }

        ReportCommands::Stats => {
            print!("{}", format_statistics(&statistics(&transactions)));
        }

        ReportCommands::Monthly => {
            let months = last_12_months(chrono::Local::now().date_naive());
            let series = monthly_series(&months, &transactions);
            print!("{}", format_monthly_series(&months, &series));
        }

        ReportCommands::Daily => {
            let days = last_30_days(chrono::Local::now().date_naive());
            let series = daily_expense_series(&days, &transactions);
            print!("{}", format_daily_series(&days, &series));
        }

        ReportCommands::Categories { kind } => {
            let kind: TransactionKind = kind.parse()?;
            let breakdown = sum_by_category(&transactions, kind);
            print!("{}", format_breakdown(&breakdown));
        }
    }

    Ok(())
}
