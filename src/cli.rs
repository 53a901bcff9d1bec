//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Fetch, cache and persist paginated marketplace collections.
#[derive(Parser, Debug)]
#[command(name = "listsync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one page of a collection into the store
    Fetch {
        /// Collection name from the config
        collection: String,
        /// Resource kind (omit for the unfiltered listing)
        #[arg(short, long)]
        kind: Option<String>,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Bypass the already-fetched check
        #[arg(short, long)]
        force: bool,
    },

    /// Fetch the page after the stored one
    Next {
        collection: String,
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Print the stored collection
    Show { collection: String },

    /// Delete every persisted record
    Purge,
}
