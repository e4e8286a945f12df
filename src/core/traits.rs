//! Capability traits for accounts and the ledger
//!
//! These traits declare the capabilities the payment processor relies on
//! separately from the concrete types that provide them: credential
//! verification on the account, and the funds-transfer primitive on the
//! ledger. Keeping the seams explicit makes the processor's requirements
//! visible and the capabilities mockable in tests.

use crate::types::{Account, PaymentError};
use rust_decimal::Decimal;

/// Capability: verify a card number against a stored credential
pub trait CardVerifiable {
    /// Pure equality check against the stored card number
    ///
    /// Returns `false` (not an error) when no card number is stored.
    fn verify_card(&self, card_number: &str) -> bool;
}

/// Capability: verify a wallet email against a stored credential
pub trait WalletVerifiable {
    /// Pure equality check against the stored wallet email
    ///
    /// Returns `false` (not an error) when no email is stored.
    fn verify_wallet_email(&self, email: &str) -> bool;
}

/// Capability: move funds between two accounts
pub trait Transferable {
    /// Transfer `amount` from `source_id` to `destination_id`
    ///
    /// Either both sides commit (balances and history entries) or neither
    /// does; no partial transfer state is ever observable.
    fn transfer(
        &mut self,
        source_id: &str,
        amount: Decimal,
        destination_id: &str,
    ) -> Result<(), PaymentError>;
}

impl CardVerifiable for Account {
    fn verify_card(&self, card_number: &str) -> bool {
        self.card_number() == Some(card_number)
    }
}

impl WalletVerifiable for Account {
    fn verify_wallet_email(&self, email: &str) -> bool {
        self.wallet_email() == Some(email)
    }
}
