use clap::{Parser, Subcommand};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "dheeto")]
#[command(about = "Inspect and settle Dheeto ledgers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List persons with the totals reported by the backend
    Persons {
        /// Page number to list
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show a person's totals computed from all of their ledgers
    Person {
        /// Backend identifier of the person
        #[arg(value_name = "PERSON_ID")]
        id: String,
    },
    /// Show one ledger with its computed summary
    Ledger {
        /// Backend identifier of the ledger
        #[arg(value_name = "LEDGER_ID")]
        id: String,
    },
    /// Search ledgers
    SearchLedgers {
        /// Only ledgers of this person
        #[arg(long, value_name = "PERSON_ID")]
        person: Option<String>,
        /// Only settled (true) or unsettled (false) ledgers
        #[arg(long)]
        settled: Option<bool>,
        /// Text the description must contain
        #[arg(long, value_name = "TEXT")]
        desc: Option<String>,
    },
    /// Mark a ledger as settled
    SettleLedger {
        /// Backend identifier of the ledger
        #[arg(value_name = "LEDGER_ID")]
        id: String,
        /// Clear the settled flag instead
        #[arg(long)]
        unsettle: bool,
    },
    /// Flip the settlement state of one item
    ToggleItem {
        /// Ledger holding the item
        #[arg(value_name = "LEDGER_ID")]
        ledger: String,
        /// Item to settle or unsettle
        #[arg(value_name = "ITEM_ID")]
        item: String,
    },
}
