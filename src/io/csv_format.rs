//! CSV format handling for account seeds, payment rows, and output
//!
//! This module centralizes all CSV format concerns, providing:
//! - Record structures for deserialization
//! - Conversion from CSV records to domain types
//! - Final account state serialization
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Formats
//!
//! Account seed file: `id,balance,card_number,wallet_email` — the two
//! credential columns may be empty.
//!
//! Payment file: `channel,amount,from,to,credential` with `channel` one of
//! `card` or `wallet` (case-insensitive).
//!
//! Output: `id,balance` sorted by account id, balances with two decimal
//! places.

use crate::types::{Account, AccountId, CredentialKind};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for an account seed row
///
/// Credential fields are optional because an account may carry neither,
/// either, or both credentials.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountCsvRecord {
    pub id: String,
    pub balance: String,
    pub card_number: Option<String>,
    pub wallet_email: Option<String>,
}

/// CSV record structure for a payment row
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaymentCsvRecord {
    pub channel: String,
    pub amount: String,
    pub from: String,
    pub to: String,
    pub credential: String,
}

/// A parsed payment row, ready to hand to the processor factory
///
/// This is deliberately not a `PaymentRequest`: requests are constructed
/// only through the processor so the payment counter tallies them.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentInstruction {
    /// Which channel the payment goes through
    pub channel: CredentialKind,
    /// Transfer amount
    pub amount: Decimal,
    /// Source account identifier
    pub source: AccountId,
    /// Destination account identifier
    pub destination: AccountId,
    /// Raw channel credential (validated at processing time)
    pub credential: String,
}

/// Convert an AccountCsvRecord to an Account
///
/// This function:
/// - Parses the balance string into a Decimal
/// - Treats empty credential columns as absent
/// - Runs the full account validation (balance sign, credential formats)
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// Result containing either:
/// - Ok(Account) - Successfully converted and validated account
/// - Err(String) - Error message describing the conversion failure
pub fn convert_account_record(csv_record: AccountCsvRecord) -> Result<Account, String> {
    let balance = Decimal::from_str(csv_record.balance.trim())
        .map_err(|_| format!("Invalid balance '{}' for account {}", csv_record.balance, csv_record.id))?;

    let card_number = csv_record
        .card_number
        .filter(|number| !number.trim().is_empty());
    let wallet_email = csv_record
        .wallet_email
        .filter(|email| !email.trim().is_empty());

    Account::new(csv_record.id, balance, card_number, wallet_email).map_err(|e| e.to_string())
}

/// Convert a PaymentCsvRecord to a PaymentInstruction
///
/// This function:
/// - Parses the channel string into a CredentialKind (case-insensitive)
/// - Parses the amount string into a Decimal
///
/// Credential format and match validation are *not* done here; that is
/// the processor's job at processing time.
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// Result containing either:
/// - Ok(PaymentInstruction) - Successfully converted row
/// - Err(String) - Error message describing the conversion failure
pub fn convert_payment_record(csv_record: PaymentCsvRecord) -> Result<PaymentInstruction, String> {
    let channel = match csv_record.channel.to_lowercase().as_str() {
        "card" => CredentialKind::Card,
        "wallet" => CredentialKind::Wallet,
        _ => {
            return Err(format!(
                "Invalid payment channel: '{}' for payment from {} to {}",
                csv_record.channel, csv_record.from, csv_record.to
            ))
        }
    };

    let amount = Decimal::from_str(csv_record.amount.trim()).map_err(|_| {
        format!(
            "Invalid amount '{}' for payment from {} to {}",
            csv_record.amount, csv_record.from, csv_record.to
        )
    })?;

    Ok(PaymentInstruction {
        channel,
        amount,
        source: csv_record.from,
        destination: csv_record.to,
        credential: csv_record.credential,
    })
}

/// Write final account states to CSV format
///
/// Writes accounts in CSV format with columns: id, balance.
/// Accounts are written in the order given; the ledger already sorts by
/// account id for deterministic output.
///
/// # Arguments
///
/// * `accounts` - Account states to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_accounts_csv(accounts: &[&Account], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["id", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for account in accounts {
        writer
            .write_record([
                account.id().to_string(),
                format!("{:.2}", account.balance()),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
