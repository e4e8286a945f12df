//! Payment request types
//!
//! This module defines the payment request and its channel-specific
//! credential. Requests are constructed through the
//! [`PaymentProcessor`](crate::core::PaymentProcessor) factory so that
//! every construction is tallied exactly once, then processed exactly once
//! and discarded.

use rust_decimal::Decimal;
use std::fmt;

/// Account identifier
///
/// Unique string key for an account, immutable after creation.
pub type AccountId = String;

/// The two payment channels supported by the ledger
///
/// This is a closed set: a new channel means a new variant implementing
/// the same validation contract, never new branching inside an existing
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    /// Card-backed channel; credential is a 16-digit card number
    Card,
    /// Wallet-backed channel; credential is an email address
    Wallet,
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialKind::Card => write!(f, "card number"),
            CredentialKind::Wallet => write!(f, "wallet email"),
        }
    }
}

/// Channel-specific credential supplied with a payment request
///
/// Carries the raw caller-supplied value; format and match validation
/// happen in the processor, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// 16-digit card number
    Card(String),
    /// Wallet email address
    Wallet(String),
}

impl Credential {
    /// The channel this credential belongs to
    pub fn kind(&self) -> CredentialKind {
        match self {
            Credential::Card(_) => CredentialKind::Card,
            Credential::Wallet(_) => CredentialKind::Wallet,
        }
    }

    /// The raw credential string
    pub fn value(&self) -> &str {
        match self {
            Credential::Card(value) | Credential::Wallet(value) => value,
        }
    }
}

/// A single payment attempt between two accounts
///
/// References the source and destination accounts by identifier; it does
/// not own them. The amount is caller-supplied and only checked for sign
/// at the ledger boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    /// Transfer amount
    pub amount: Decimal,
    /// Source account identifier
    pub source: AccountId,
    /// Destination account identifier
    pub destination: AccountId,
    /// Channel-specific credential to validate against the source account
    pub credential: Credential,
}

impl PaymentRequest {
    /// The channel this request goes through
    pub fn channel(&self) -> CredentialKind {
        self.credential.kind()
    }
}
