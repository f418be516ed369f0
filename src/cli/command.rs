use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::storage::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Contacts file, one `name|phone|email` record per line
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// Run a single command; without one the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Find a contact by name (case-insensitive)
    Search {
        /// Name to look up
        #[arg(long)]
        name: String,
    },
    /// List contacts whose name, phone or email contains the query
    Find {
        /// Text to look for (case-insensitive)
        #[arg(long)]
        query: String,
    },
    /// Delete a contact by name (case-insensitive)
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
    /// List contacts in the order they were added
    List {
        /// Print contacts as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Import contacts from a JSON array, as written by `list --json`
    Import {
        /// File path to the source .json file
        #[arg(long)]
        json: PathBuf,
    },
}
