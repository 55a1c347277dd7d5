use clap::{Parser, Subcommand};

use crate::models::status::LeadStatus;

#[derive(Parser)]
#[command(
    name = "leadnotes",
    version,
    about = "Lead tracker - turn pasted company notes into a searchable, status-tagged list",
    after_help = "Notes are parsed line by line: a line starting with the header marker \
                  (default \"Компания:\") opens a company, bullet lines (-, •, ●, *) and plain \
                  lines below it become insights. Data lives in .leadnotes/ under the current directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write .leadnotes/config.toml with the default settings (kept if it exists)
    Init,

    /// Parse notes and print the detected companies without storing them
    Parse {
        /// Input file (reads stdin when omitted or "-")
        file: Option<String>,
    },

    /// Split an insight blob into clean lines
    Split {
        /// Input file (reads stdin when omitted or "-")
        file: Option<String>,
    },

    /// Parse notes and replace the stored company list.
    ///
    /// Existing statuses are kept and reapply to companies with the same name.
    Import {
        /// Input file (reads stdin when omitted or "-")
        file: Option<String>,
    },

    /// Load the built-in sample companies
    Sample,

    /// List stored companies with their statuses
    List {
        /// Case-insensitive filter on company name
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show one company by exact name
    Show {
        /// Company name
        name: String,
    },

    /// Set the status of a company
    Status {
        /// Company name
        name: String,
        /// New status
        #[arg(value_enum)]
        status: LeadStatus,
    },

    /// Remove the status of a company
    Reset {
        /// Company name
        name: String,
    },

    /// Show how many companies have a status
    Progress,

    /// Delete all stored companies and statuses
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}
