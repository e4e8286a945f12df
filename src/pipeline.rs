//! Batch processing pipeline
//!
//! Orchestrates a complete run: seed the ledger from the accounts file,
//! stream the payments file through the processor, report per-payment
//! outcomes, and write the final account states.
//!
//! # Design
//!
//! The pipeline focuses on orchestration, delegating:
//! - CSV parsing to `AccountReader` / `PaymentReader` (iterator interfaces)
//! - Payment validation and transfers to `PaymentProcessor` and `Ledger`
//! - CSV output to `csv_format::write_accounts_csv` (format handling)
//!
//! Recoverable errors (malformed rows, failed payments) are written to the
//! log sink and processing continues; only fatal errors (unreadable files,
//! broken output) abort the run.

use crate::core::{Ledger, PaymentProcessor};
use crate::io::csv_format::{write_accounts_csv, PaymentInstruction};
use crate::io::reader::{AccountReader, PaymentReader};
use crate::types::{CredentialKind, PaymentRequest};
use std::io::Write;
use std::path::Path;

/// Options for a pipeline run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Whether to dump each account's transaction history after the batch
    pub show_history: bool,
}

/// Summary of a completed pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Payment requests constructed (the processor's counter)
    pub total_payments: u64,
    /// Payments that applied a transfer
    pub succeeded: u64,
    /// Input rows skipped because they could not be parsed
    pub skipped_rows: u64,
}

/// Run the complete processing pipeline
///
/// 1. Streams account seed rows into a fresh [`Ledger`]; rows that fail
///    parsing or validation are logged and skipped.
/// 2. Streams payment rows, constructing each request through a fresh
///    [`PaymentProcessor`] (so the counter tallies every attempt) and
///    processing it against the ledger; each outcome is logged.
/// 3. Optionally dumps per-account history, then the total payment count.
/// 4. Writes final account states as CSV to `output`.
///
/// # Arguments
///
/// * `accounts_path` - Path to the account seed CSV file
/// * `payments_path` - Path to the payments CSV file
/// * `options` - Run options (history dump)
/// * `output` - Writer for the final account state CSV
/// * `log` - Writer for per-payment outcomes and diagnostics
///
/// # Returns
///
/// * `Ok(RunSummary)` if the run completed (possibly with recoverable,
///   logged errors)
/// * `Err(String)` if a fatal error occurred (unreadable input, broken
///   output)
pub fn run(
    accounts_path: &Path,
    payments_path: &Path,
    options: &RunOptions,
    output: &mut dyn Write,
    log: &mut dyn Write,
) -> Result<RunSummary, String> {
    let mut ledger = Ledger::new();
    let mut skipped_rows = 0u64;

    for result in AccountReader::new(accounts_path)? {
        match result.and_then(|account| {
            let id = account.id().to_string();
            ledger
                .add_account(account)
                .map_err(|e| format!("Account {}: {}", id, e))
        }) {
            Ok(()) => {}
            Err(e) => {
                skipped_rows += 1;
                writeln!(log, "Error: {}", e).map_err(|e| format!("Failed to write log: {}", e))?;
            }
        }
    }

    let mut processor = PaymentProcessor::new();
    let mut succeeded = 0u64;

    for result in PaymentReader::new(payments_path)? {
        let instruction = match result {
            Ok(instruction) => instruction,
            Err(e) => {
                skipped_rows += 1;
                writeln!(log, "Error: {}", e).map_err(|e| format!("Failed to write log: {}", e))?;
                continue;
            }
        };

        let request = build_request(&mut processor, instruction);
        let outcome = processor.execute(&request, &mut ledger);
        if outcome.is_ok() {
            succeeded += 1;
        }
        log_outcome(log, &request, &outcome).map_err(|e| format!("Failed to write log: {}", e))?;
    }

    if options.show_history {
        for account in ledger.accounts() {
            writeln!(log, "\n== account history {} ==", account.id())
                .map_err(|e| format!("Failed to write log: {}", e))?;
            for entry in account.history() {
                writeln!(log, "{}", entry).map_err(|e| format!("Failed to write log: {}", e))?;
            }
        }
    }

    writeln!(log, "\nTotal payments made: {}", processor.total_payments())
        .map_err(|e| format!("Failed to write log: {}", e))?;

    write_accounts_csv(&ledger.accounts(), output)?;

    Ok(RunSummary {
        total_payments: processor.total_payments(),
        succeeded,
        skipped_rows,
    })
}

/// Construct a payment request through the processor factory
///
/// Every parsed row becomes a request, and therefore a tick of the
/// counter, regardless of whether processing later succeeds.
fn build_request(
    processor: &mut PaymentProcessor,
    instruction: PaymentInstruction,
) -> PaymentRequest {
    match instruction.channel {
        CredentialKind::Card => processor.card_payment(
            instruction.amount,
            instruction.source,
            instruction.destination,
            instruction.credential,
        ),
        CredentialKind::Wallet => processor.wallet_payment(
            instruction.amount,
            instruction.source,
            instruction.destination,
            instruction.credential,
        ),
    }
}

fn log_outcome(
    log: &mut dyn Write,
    request: &PaymentRequest,
    outcome: &Result<(), crate::types::PaymentError>,
) -> std::io::Result<()> {
    match outcome {
        Ok(()) => writeln!(
            log,
            "SUCCESS | {} payment of {} from {} to {}",
            channel_name(request),
            request.amount,
            request.source,
            request.destination
        ),
        Err(reason) => writeln!(
            log,
            "FAILURE | {} payment of {} from {} to {} ({})",
            channel_name(request),
            request.amount,
            request.source,
            request.destination,
            reason
        ),
    }
}

fn channel_name(request: &PaymentRequest) -> &'static str {
    match request.channel() {
        CredentialKind::Card => "card",
        CredentialKind::Wallet => "wallet",
    }
}
