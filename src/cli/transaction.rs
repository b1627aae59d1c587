//! Transaction CLI commands

use clap::Subcommand;

use crate::display::format_transaction_register;
use crate::error::{TrackerError, TrackerResult};
use crate::filter::{sort_by_date_descending, TransactionFilter};
use crate::models::{Money, NewTransaction, TransactionId, TransactionKind, INCOME_CATEGORIES};
use crate::storage::Storage;

use super::{parse_date, parse_month};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (e.g., "45.50")
        amount: String,
        /// Transaction type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Search description and category for a substring
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by exact category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
        /// Filter by month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: i64,
    },
    /// Delete all transactions
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> TrackerResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            kind,
            category,
            description,
            date,
        } => {
            let kind = kind.parse()?;

            let amount = Money::parse(&amount).map_err(|e| {
                TrackerError::Validation(format!(
                    "Invalid amount format: '{}'. Use format like '45.50'. Error: {}",
                    amount, e
                ))
            })?;

            let date = if let Some(date_str) = date {
                parse_date(&date_str)?
            } else {
                chrono::Local::now().date_naive()
            };

            let category = category.trim().to_string();
            match kind {
                TransactionKind::Expense if !storage.categories.contains(&category)? => {
                    return Err(TrackerError::Validation(format!(
                        "Unknown category '{}'. Run 'outlay category list' to see available \
                         categories, or add one with 'outlay category add'",
                        category
                    )));
                }
                TransactionKind::Income if !INCOME_CATEGORIES.contains(&category.as_str()) => {
                    return Err(TrackerError::Validation(format!(
                        "Unknown income category '{}'. Valid income categories: {}",
                        category,
                        INCOME_CATEGORIES.join(", ")
                    )));
                }
                _ => {}
            }

            let txn = storage.transactions.add(NewTransaction {
                date,
                kind,
                category,
                description,
                amount,
            })?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date);
            println!("  Type:     {}", txn.kind);
            println!("  Category: {}", txn.category);
            if !txn.description.is_empty() {
                println!("  Desc:     {}", txn.description);
            }
            println!("  Amount:   {}", txn.amount);
        }

        TransactionCommands::List {
            search,
            category,
            kind,
            from,
            to,
            month,
        } => {
            let mut filter = TransactionFilter::new();

            if let Some(text) = search {
                filter = filter.search(text);
            }
            if let Some(cat) = category {
                filter = filter.category(cat);
            }
            if let Some(kind_str) = kind {
                filter = filter.kind(kind_str.parse()?);
            }

            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            filter = filter.date_range(from, to);

            if let Some(month_str) = month {
                filter = filter.month(parse_month(&month_str)?);
            }

            let all = storage.transactions.list()?;
            let mut transactions = filter.apply(&all);
            sort_by_date_descending(&mut transactions);

            print!("{}", format_transaction_register(&transactions));
            println!("\nShowing {} of {} transactions", transactions.len(), all.len());
        }

        TransactionCommands::Delete { id } => {
            let id = TransactionId::from_millis(id);
            if storage.transactions.remove(id)? {
                println!("Deleted transaction: {}", id);
            } else {
                println!("No transaction with id: {}", id);
            }
        }

        TransactionCommands::Clear { force } => {
            let count = storage.transactions.count()?;

            if !force {
                println!("About to delete all {} transactions.", count);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            storage.transactions.clear()?;
            println!("Deleted {} transactions", count);
        }
    }

    Ok(())
}
