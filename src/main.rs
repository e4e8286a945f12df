//! Payments Ledger CLI
//!
//! Command-line interface for processing channel-validated payments from
//! CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.csv payments.csv > balances.csv
//! cargo run -- accounts.csv payments.csv --history > balances.csv
//! ```
//!
//! The program seeds the ledger from the accounts file, processes every
//! payment row through the validation gate, and writes the final account
//! balances to stdout. Per-payment outcomes, optional history dumps, and
//! the total payment count go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use payments_ledger::cli;
use payments_ledger::pipeline::{self, RunOptions};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let options = RunOptions {
        show_history: args.history,
    };

    // Final balances go to stdout; outcomes and diagnostics to stderr
    let mut output = std::io::stdout();
    let mut log = std::io::stderr();
    if let Err(e) = pipeline::run(
        &args.accounts_file,
        &args.payments_file,
        &options,
        &mut output,
        &mut log,
    ) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
