//! Command implementations for the admin-element CLI.
//!
//! Exposes the lookup table builder and the month-start helper so option
//! lists can be checked from the command line.

use clap::Subcommand;

pub mod first_day;
pub mod lookup;

#[derive(Subcommand)]
pub enum Command {
    /// Build an id -> label lookup table from a list of records
    Lookup {
        /// Records file: CSV with `id,value` headers, or a JSON array of {id, value}
        #[arg(short = 'r', long)]
        records: String,

        /// Existing JSON table to extend; its entries win over the records
        #[arg(short = 's', long)]
        seed: Option<String>,

        /// Write the table here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Print the first day of the month containing a date
    FirstDay {
        /// Date in YYYY-MM-DD format (defaults to today)
        #[arg(short = 'd', long)]
        date: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Lookup {
            records,
            seed,
            output,
        } => lookup::run_lookup(&records, seed.as_deref(), output.as_deref()),
        Command::FirstDay { date } => first_day::run_first_day(date.as_deref()),
    }
}
