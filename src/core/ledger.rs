//! Account ledger
//!
//! This module provides the `Ledger` struct which owns the account
//! collection and the single mutating primitive, a funds transfer between
//! two accounts.
//!
//! The Ledger is responsible for:
//! - Seeding accounts and resolving them by identifier
//! - Enforcing the non-negative balance invariant during transfers
//! - Recording one history entry per side of every successful transfer
//! - Providing sorted account listings for output

use crate::core::traits::Transferable;
use crate::types::{Account, PaymentError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Owns all accounts and the transfer primitive
///
/// The Ledger maintains an in-memory map of account identifiers to account
/// state. All balance mutation flows through [`Ledger::transfer`]; failed
/// transfers leave every account bit-for-bit unchanged.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Map of account identifiers to account state
    accounts: HashMap<String, Account>,
}

impl Ledger {
    /// Create a new Ledger with no accounts
    pub fn new() -> Self {
        Ledger {
            accounts: HashMap::new(),
        }
    }

    /// Seed an account into the ledger
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if an account with the same identifier
    /// is already present; the existing account is retained.
    pub fn add_account(&mut self, account: Account) -> Result<(), PaymentError> {
        if self.accounts.contains_key(account.id()) {
            return Err(PaymentError::duplicate_account(account.id()));
        }
        self.accounts.insert(account.id().to_string(), account);
        Ok(())
    }

    /// Resolve an account by identifier
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this identifier.
    pub fn account(&self, id: &str) -> Result<&Account, PaymentError> {
        self.accounts
            .get(id)
            .ok_or_else(|| PaymentError::account_not_found(id))
    }

    /// Resolve an account by identifier for mutation
    ///
    /// Used by callers that update credentials after seeding; balance
    /// mutation still goes through the setters, which enforce the
    /// non-negative invariant.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this identifier.
    pub fn account_mut(&mut self, id: &str) -> Result<&mut Account, PaymentError> {
        self.accounts
            .get_mut(id)
            .ok_or_else(|| PaymentError::account_not_found(id))
    }

    /// Number of accounts in the ledger
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Get all accounts sorted by identifier
    ///
    /// Sorted output keeps CSV generation and history dumps deterministic.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.id().cmp(b.id()));
        accounts
    }

    /// Transfer funds between two accounts
    ///
    /// Validates the whole operation before committing anything: both
    /// post-transfer balances are computed with checked arithmetic first,
    /// then both balances and both history entries are written together.
    /// A failed transfer leaves every account exactly as it was.
    ///
    /// # Arguments
    ///
    /// * `source_id` - Account to debit
    /// * `amount` - Amount to move (must be non-negative)
    /// * `destination_id` - Account to credit
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Source and destination are the same account (`SelfTransfer`)
    /// - The amount is negative (`NegativeAmount`)
    /// - Either identifier is unknown (`AccountNotFound`)
    /// - The source balance is less than the amount (`InsufficientFunds`)
    /// - Crediting the destination would overflow (`ArithmeticOverflow`)
    pub fn transfer(
        &mut self,
        source_id: &str,
        amount: Decimal,
        destination_id: &str,
    ) -> Result<(), PaymentError> {
        if source_id == destination_id {
            return Err(PaymentError::self_transfer(source_id));
        }

        if amount < Decimal::ZERO {
            return Err(PaymentError::negative_amount(amount));
        }

        let source_balance = self.account(source_id)?.balance();
        let destination_balance = self.account(destination_id)?.balance();

        if source_balance < amount {
            return Err(PaymentError::insufficient_funds(
                source_id,
                source_balance,
                amount,
            ));
        }

        // source_balance >= amount >= 0, so the debit cannot underflow
        let debited = source_balance - amount;

        let credited = destination_balance
            .checked_add(amount)
            .ok_or_else(|| PaymentError::arithmetic_overflow("transfer", destination_id))?;

        // All checks passed; commit both sides together.
        if let Some(source) = self.accounts.get_mut(source_id) {
            source.commit_balance(debited);
            source.record(format!("sent {} to {}", amount, destination_id));
        }
        if let Some(destination) = self.accounts.get_mut(destination_id) {
            destination.commit_balance(credited);
            destination.record(format!("received {} from {}", amount, source_id));
        }

        Ok(())
    }
}

impl Transferable for Ledger {
    fn transfer(
        &mut self,
        source_id: &str,
        amount: Decimal,
        destination_id: &str,
    ) -> Result<(), PaymentError> {
        Ledger::transfer(self, source_id, amount, destination_id)
    }
}
