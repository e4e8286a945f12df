//! Account-related types for the payments ledger
//!
//! This module defines the Account structure: the balance, the stored
//! channel credentials, and the append-only transaction history.
//!
//! All mutation goes through validating setters. The balance can never be
//! assigned a negative value, and a credential can never be assigned a
//! value that fails its channel's format rule; a rejected assignment
//! leaves the prior state intact.

use crate::core::validation::{is_valid_card_format, is_valid_email_format};
use crate::types::error::PaymentError;
use crate::types::payment::{AccountId, CredentialKind};
use rust_decimal::Decimal;

/// A single ledger account
///
/// Created once with an initial balance and optional credentials, then
/// mutated only through the ledger's transfer primitive (balance) or the
/// explicit credential setters. Accounts are never deleted during normal
/// operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique identifier, immutable after creation
    id: AccountId,

    /// Current balance; invariant: never negative
    balance: Decimal,

    /// Stored card number (exactly 16 digits) for the card channel
    card_number: Option<String>,

    /// Stored email (contains `@` and `.`) for the wallet channel
    wallet_email: Option<String>,

    /// Append-only history, one entry per side of every successful
    /// transfer involving this account
    history: Vec<String>,
}

impl Account {
    /// Create a new account
    ///
    /// Validates the initial balance and both optional credentials with the
    /// same rules the setters enforce, so an `Account` can never exist in
    /// an invalid state.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique account identifier
    /// * `balance` - Initial balance (must be non-negative)
    /// * `card_number` - Optional card number (exactly 16 digits)
    /// * `wallet_email` - Optional wallet email (contains `@` and `.`)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The initial balance is negative (`InvalidState`)
    /// - A supplied credential fails its format rule (`InvalidFormat`)
    pub fn new(
        id: impl Into<AccountId>,
        balance: Decimal,
        card_number: Option<String>,
        wallet_email: Option<String>,
    ) -> Result<Self, PaymentError> {
        let id = id.into();

        if balance < Decimal::ZERO {
            return Err(PaymentError::invalid_state(&id, balance));
        }

        if let Some(number) = &card_number {
            if !is_valid_card_format(number) {
                return Err(PaymentError::invalid_format(CredentialKind::Card, number));
            }
        }

        if let Some(email) = &wallet_email {
            if !is_valid_email_format(email) {
                return Err(PaymentError::invalid_format(CredentialKind::Wallet, email));
            }
        }

        Ok(Account {
            id,
            balance,
            card_number,
            wallet_email,
            history: Vec::new(),
        })
    }

    /// The account identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The stored card number, if any
    pub fn card_number(&self) -> Option<&str> {
        self.card_number.as_deref()
    }

    /// The stored wallet email, if any
    pub fn wallet_email(&self) -> Option<&str> {
        self.wallet_email.as_deref()
    }

    /// The transaction history, oldest entry first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Assign a new balance
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if `value` is negative; the prior balance is
    /// retained.
    pub fn set_balance(&mut self, value: Decimal) -> Result<(), PaymentError> {
        if value < Decimal::ZERO {
            return Err(PaymentError::invalid_state(&self.id, value));
        }
        self.balance = value;
        Ok(())
    }

    /// Assign a new card number
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if `number` is not exactly 16 digits; the
    /// prior credential is retained.
    pub fn set_card_number(&mut self, number: &str) -> Result<(), PaymentError> {
        if !is_valid_card_format(number) {
            return Err(PaymentError::invalid_format(CredentialKind::Card, number));
        }
        self.card_number = Some(number.to_string());
        Ok(())
    }

    /// Assign a new wallet email
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if `email` does not contain both `@` and
    /// `.`; the prior credential is retained.
    pub fn set_wallet_email(&mut self, email: &str) -> Result<(), PaymentError> {
        if !is_valid_email_format(email) {
            return Err(PaymentError::invalid_format(CredentialKind::Wallet, email));
        }
        self.wallet_email = Some(email.to_string());
        Ok(())
    }

    /// Append an entry to the transaction history
    ///
    /// Only the ledger's transfer primitive records entries; history is
    /// append-only and never rewritten.
    pub(crate) fn record(&mut self, entry: String) {
        self.history.push(entry);
    }

    /// Overwrite the balance without the sign check
    ///
    /// Internal to the ledger transfer, which has already computed and
    /// validated both post-transfer balances before committing either side.
    pub(crate) fn commit_balance(&mut self, value: Decimal) {
        self.balance = value;
    }
}
