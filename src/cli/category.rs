//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::TrackerResult;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a new expense category
    Add {
        /// Category name
        name: String,
    },
    /// Remove an expense category
    ///
    /// Existing transactions keep their category label.
    Remove {
        /// Category name
        name: String,
    },
    /// List all expense categories
    List,
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> TrackerResult<()> {
    match cmd {
        CategoryCommands::Add { name } => {
            let added = storage.categories.add(&name)?;
            println!("Added category: {}", added);
        }

        CategoryCommands::Remove { name } => {
            if storage.categories.remove(&name)? {
                println!("Removed category: {}", name);
            } else {
                println!("No category named: {}", name);
            }
        }

        CategoryCommands::List => {
            let categories = storage.categories.list()?;
            print!("{}", format_category_list(&categories));
        }
    }

    Ok(())
}
