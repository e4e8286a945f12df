//! Payment processor
//!
//! This module provides the `PaymentProcessor`: the factory for payment
//! requests (which owns the total-payments counter) and the
//! channel-specific validation gate in front of the ledger's transfer
//! primitive.
//!
//! Every request goes through the same three-step contract:
//! 1. Validate the credential's format with the channel's static rule,
//!    before any account lookup.
//! 2. Verify the credential matches the value stored on the source
//!    account.
//! 3. Only then delegate to [`Ledger::transfer`] and return its result
//!    unchanged.
//!
//! The two channels differ only in which credential kind and format rule
//! they apply.

use crate::core::ledger::Ledger;
use crate::core::traits::{CardVerifiable, WalletVerifiable};
use crate::core::validation::{is_valid_card_format, is_valid_email_format};
use crate::types::{AccountId, Credential, CredentialKind, PaymentError, PaymentRequest};
use rust_decimal::Decimal;

/// Constructs and processes payment requests
///
/// Owns the running count of payments attempted. The counter is explicit
/// per-processor state rather than a process global, so independent
/// processors (and tests) tally independently. It increments exactly once
/// per request constructed, at construction time, regardless of whether
/// the request is ever processed or what the outcome is.
#[derive(Debug, Default)]
pub struct PaymentProcessor {
    /// Total payment requests constructed through this processor
    total_payments: u64,
}

impl PaymentProcessor {
    /// Create a new PaymentProcessor with a zeroed counter
    pub fn new() -> Self {
        PaymentProcessor { total_payments: 0 }
    }

    /// Construct a card-channel payment request
    ///
    /// Increments the total-payments counter. The card number is carried
    /// as-is; validation happens at processing time.
    pub fn card_payment(
        &mut self,
        amount: Decimal,
        source: impl Into<AccountId>,
        destination: impl Into<AccountId>,
        card_number: impl Into<String>,
    ) -> PaymentRequest {
        self.new_request(
            amount,
            source.into(),
            destination.into(),
            Credential::Card(card_number.into()),
        )
    }

    /// Construct a wallet-channel payment request
    ///
    /// Increments the total-payments counter. The email is carried as-is;
    /// validation happens at processing time.
    pub fn wallet_payment(
        &mut self,
        amount: Decimal,
        source: impl Into<AccountId>,
        destination: impl Into<AccountId>,
        email: impl Into<String>,
    ) -> PaymentRequest {
        self.new_request(
            amount,
            source.into(),
            destination.into(),
            Credential::Wallet(email.into()),
        )
    }

    fn new_request(
        &mut self,
        amount: Decimal,
        source: AccountId,
        destination: AccountId,
        credential: Credential,
    ) -> PaymentRequest {
        self.total_payments += 1;
        PaymentRequest {
            amount,
            source,
            destination,
            credential,
        }
    }

    /// Total payment requests constructed so far
    ///
    /// Strictly increases by one per request, never resets.
    pub fn total_payments(&self) -> u64 {
        self.total_payments
    }

    /// Process a payment request against the ledger
    ///
    /// The boolean façade over [`PaymentProcessor::execute`]: a
    /// well-formed payment that fails (bad format, wrong credential,
    /// insufficient funds, self transfer, unknown account) is an expected
    /// business outcome and comes back as `false`, never as a hard error.
    ///
    /// # Returns
    ///
    /// `true` if the transfer was applied, `false` otherwise. On `false`
    /// no account state has changed.
    pub fn process(&self, request: &PaymentRequest, ledger: &mut Ledger) -> bool {
        self.execute(request, ledger).is_ok()
    }

    /// Process a payment request, reporting the failure reason
    ///
    /// Same contract as [`PaymentProcessor::process`] but surfaces the
    /// specific [`PaymentError`] for callers that render diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The credential fails its channel's format rule (`InvalidFormat`)
    /// - The source account is unknown (`AccountNotFound`)
    /// - The credential does not match the stored value
    ///   (`CredentialMismatch`)
    /// - The ledger transfer fails (`SelfTransfer`, `InsufficientFunds`,
    ///   `NegativeAmount`, `AccountNotFound`, `ArithmeticOverflow`)
    pub fn execute(
        &self,
        request: &PaymentRequest,
        ledger: &mut Ledger,
    ) -> Result<(), PaymentError> {
        // Format check comes first: a malformed credential is rejected
        // before any account lookup.
        match &request.credential {
            Credential::Card(number) => {
                if !is_valid_card_format(number) {
                    return Err(PaymentError::invalid_format(CredentialKind::Card, number));
                }

                let source = ledger.account(&request.source)?;
                if !source.verify_card(number) {
                    return Err(PaymentError::credential_mismatch(
                        CredentialKind::Card,
                        &request.source,
                    ));
                }
            }
            Credential::Wallet(email) => {
                if !is_valid_email_format(email) {
                    return Err(PaymentError::invalid_format(CredentialKind::Wallet, email));
                }

                let source = ledger.account(&request.source)?;
                if !source.verify_wallet_email(email) {
                    return Err(PaymentError::credential_mismatch(
                        CredentialKind::Wallet,
                        &request.source,
                    ));
                }
            }
        }

        ledger.transfer(&request.source, request.amount, &request.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;

    const CARD_A001: &str = "1234567890123456";
    const CARD_A002: &str = "1111222233334444";
    const EMAIL_A001: &str = "user1@example.com";

    fn seeded_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add_account(
                Account::new(
                    "A001",
                    Decimal::new(1000, 0),
                    Some(CARD_A001.to_string()),
                    Some(EMAIL_A001.to_string()),
                )
                .unwrap(),
            )
            .unwrap();
        ledger
            .add_account(
                Account::new(
                    "A002",
                    Decimal::new(500, 0),
                    Some(CARD_A002.to_string()),
                    Some("user2@example.com".to_string()),
                )
                .unwrap(),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn test_card_payment_with_matching_card_succeeds() {
        let mut ledger = seeded_ledger();
        let mut processor = PaymentProcessor::new();

        let request = processor.card_payment(Decimal::new(200, 0), "A001", "A002", CARD_A001);

        assert!(processor.process(&request, &mut ledger));
        assert_eq!(
            ledger.account("A001").unwrap().balance(),
            Decimal::new(800, 0)
        );
        assert_eq!(
            ledger.account("A002").unwrap().balance(),
            Decimal::new(700, 0)
        );
    }

    #[test]
    fn test_wallet_payment_with_wrong_email_fails_without_mutation() {
        let mut ledger = seeded_ledger();
        let mut processor = PaymentProcessor::new();

        let request =
            processor.wallet_payment(Decimal::new(300, 0), "A001", "A002", "wrong@example.com");

        assert!(!processor.process(&request, &mut ledger));
        assert_eq!(
            ledger.account("A001").unwrap().balance(),
            Decimal::new(1000, 0)
        );
        assert_eq!(
            ledger.account("A002").unwrap().balance(),
            Decimal::new(500, 0)
        );
    }

    #[test]
    fn test_card_payment_with_insufficient_funds_fails_after_credential_check() {
        let mut ledger = seeded_ledger();
        let mut processor = PaymentProcessor::new();

        // Credential matches A002; the transfer itself must fail
        let request = processor.card_payment(Decimal::new(900, 0), "A002", "A001", CARD_A002);

        let result = processor.execute(&request, &mut ledger);
        assert!(matches!(
            result.unwrap_err(),
            PaymentError::InsufficientFunds { .. }
        ));
        assert_eq!(
            ledger.account("A001").unwrap().balance(),
            Decimal::new(1000, 0)
        );
        assert_eq!(
            ledger.account("A002").unwrap().balance(),
            Decimal::new(500, 0)
        );
    }

    #[test]
    fn test_payment_to_self_fails_even_with_valid_credential() {
        let mut ledger = seeded_ledger();
        let mut processor = PaymentProcessor::new();

        let request = processor.card_payment(Decimal::new(100, 0), "A001", "A001", CARD_A001);

        let result = processor.execute(&request, &mut ledger);
        assert!(matches!(
            result.unwrap_err(),
            PaymentError::SelfTransfer { .. }
        ));
        assert_eq!(
            ledger.account("A001").unwrap().balance(),
            Decimal::new(1000, 0)
        );
    }

    #[test]
    fn test_malformed_wallet_credential_is_rejected_before_account_lookup() {
        // An empty ledger: if format validation ran after resolution this
        // would surface AccountNotFound instead of InvalidFormat.
        let mut ledger = Ledger::new();
        let mut processor = PaymentProcessor::new();

        let request = processor.wallet_payment(Decimal::new(50, 0), "A001", "A002", "invalid");

        let result = processor.execute(&request, &mut ledger);
        assert!(matches!(
            result.unwrap_err(),
            PaymentError::InvalidFormat {
                kind: CredentialKind::Wallet,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_card_credential_is_rejected_before_account_lookup() {
        let mut ledger = Ledger::new();
        let mut processor = PaymentProcessor::new();

        let request = processor.card_payment(Decimal::new(50, 0), "A001", "A002", "1234");

        let result = processor.execute(&request, &mut ledger);
        assert!(matches!(
            result.unwrap_err(),
            PaymentError::InvalidFormat {
                kind: CredentialKind::Card,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_source_account_fails() {
        let mut ledger = seeded_ledger();
        let mut processor = PaymentProcessor::new();

        let request = processor.card_payment(Decimal::new(50, 0), "A999", "A001", CARD_A001);

        let result = processor.execute(&request, &mut ledger);
        assert!(matches!(
            result.unwrap_err(),
            PaymentError::AccountNotFound { .. }
        ));
    }

    #[test]
    fn test_unknown_destination_fails_after_credential_check() {
        let mut ledger = seeded_ledger();
        let mut processor = PaymentProcessor::new();

        let request = processor.card_payment(Decimal::new(50, 0), "A001", "A999", CARD_A001);

        assert!(!processor.process(&request, &mut ledger));
        assert_eq!(
            ledger.account("A001").unwrap().balance(),
            Decimal::new(1000, 0)
        );
    }

    #[test]
    fn test_counter_increments_once_per_construction() {
        let mut processor = PaymentProcessor::new();
        assert_eq!(processor.total_payments(), 0);

        processor.card_payment(Decimal::new(1, 0), "A001", "A002", CARD_A001);
        assert_eq!(processor.total_payments(), 1);

        processor.wallet_payment(Decimal::new(1, 0), "A001", "A002", "invalid");
        assert_eq!(processor.total_payments(), 2);
    }

    #[test]
    fn test_counter_is_independent_of_processing_outcome() {
        let mut ledger = seeded_ledger();
        let mut processor = PaymentProcessor::new();

        let ok = processor.card_payment(Decimal::new(10, 0), "A001", "A002", CARD_A001);
        let bad = processor.card_payment(Decimal::new(10, 0), "A001", "A002", "1234");
        let never_processed = processor.card_payment(Decimal::new(10, 0), "A001", "A002", CARD_A001);

        assert!(processor.process(&ok, &mut ledger));
        assert!(!processor.process(&bad, &mut ledger));
        drop(never_processed);

        assert_eq!(processor.total_payments(), 3);
    }

    #[test]
    fn test_counters_are_independent_between_processors() {
        let mut first = PaymentProcessor::new();
        let mut second = PaymentProcessor::new();

        first.card_payment(Decimal::new(1, 0), "A001", "A002", CARD_A001);
        first.card_payment(Decimal::new(1, 0), "A001", "A002", CARD_A001);
        second.wallet_payment(Decimal::new(1, 0), "A001", "A002", EMAIL_A001);

        assert_eq!(first.total_payments(), 2);
        assert_eq!(second.total_payments(), 1);
    }

    #[test]
    fn test_five_payment_batch_end_state() {
        // Five-payment batch: one success, then mismatch, insufficient
        // funds, self transfer, bad format.
        let mut ledger = seeded_ledger();
        let mut processor = PaymentProcessor::new();

        let batch = vec![
            processor.card_payment(Decimal::new(200, 0), "A001", "A002", CARD_A001),
            processor.wallet_payment(Decimal::new(300, 0), "A001", "A002", "wrong@example.com"),
            processor.card_payment(Decimal::new(900, 0), "A002", "A001", CARD_A002),
            processor.card_payment(Decimal::new(100, 0), "A001", "A001", CARD_A001),
            processor.wallet_payment(Decimal::new(50, 0), "A001", "A002", "invalid"),
        ];

        let outcomes: Vec<bool> = batch
            .iter()
            .map(|request| processor.process(request, &mut ledger))
            .collect();

        assert_eq!(outcomes, [true, false, false, false, false]);
        assert_eq!(
            ledger.account("A001").unwrap().balance(),
            Decimal::new(800, 0)
        );
        assert_eq!(
            ledger.account("A002").unwrap().balance(),
            Decimal::new(700, 0)
        );
        assert_eq!(processor.total_payments(), 5);
    }
}
