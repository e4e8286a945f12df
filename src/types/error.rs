//! Error types for the payments ledger
//!
//! This module defines all error conditions that can arise while seeding
//! accounts, mutating account state, or processing payments.
//!
//! # Error Categories
//!
//! - **State Errors**: negative balance assignment, duplicate accounts
//! - **Format Errors**: credentials that fail their channel's syntax rule
//! - **Payment Errors**: credential mismatch, insufficient funds, self
//!   transfer, unknown accounts
//! - **Glue Errors**: file I/O and CSV parsing failures in the CLI layer
//!
//! Every variant is recoverable: a failed payment is reported and the run
//! continues, and a rejected mutation leaves the prior state intact.

use crate::types::payment::CredentialKind;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the payments ledger
///
/// Each variant carries enough context to render a useful diagnostic.
/// Direct state mutation (`set_balance`, credential setters, account
/// construction) surfaces these as hard `Result` errors; the payment
/// processor folds them into a boolean `false` outcome instead, since a
/// failed-but-well-formed payment is an expected business result rather
/// than a programming error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    /// Attempted to assign a negative balance to an account
    ///
    /// Rejected at the mutation boundary; the prior balance is retained.
    #[error("Invalid state for account {account}: balance cannot be negative (got {value})")]
    InvalidState {
        /// Account identifier
        account: String,
        /// The rejected balance value
        value: Decimal,
    },

    /// Credential does not match its channel's required syntax
    ///
    /// Card numbers must be exactly 16 digits; wallet emails must contain
    /// both `@` and `.`. Rejected at assignment or at payment validation;
    /// the prior state is retained.
    #[error("Invalid {kind} format: '{value}'")]
    InvalidFormat {
        /// Which credential kind failed validation
        kind: CredentialKind,
        /// The rejected credential value
        value: String,
    },

    /// Supplied credential does not equal the account's stored credential
    ///
    /// The payment fails; no balances are touched.
    #[error("The {kind} does not match account {account}")]
    CredentialMismatch {
        /// Which credential kind was checked
        kind: CredentialKind,
        /// Source account identifier
        account: String,
    },

    /// Source balance is less than the requested transfer amount
    ///
    /// The payment fails; no balances are touched.
    #[error(
        "Insufficient funds in account {account}: available {available}, requested {requested}"
    )]
    InsufficientFunds {
        /// Source account identifier
        account: String,
        /// Available balance
        available: Decimal,
        /// Requested transfer amount
        requested: Decimal,
    },

    /// Source and destination are the same account
    ///
    /// The payment fails; no balances are touched.
    #[error("Cannot transfer from account {account} to itself")]
    SelfTransfer {
        /// The account identifier on both sides
        account: String,
    },

    /// No account exists with the given identifier
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The unknown account identifier
        account: String,
    },

    /// Transfer amount is negative
    ///
    /// A negative amount would drive the destination balance below zero,
    /// so it is rejected before any account lookup.
    #[error("Transfer amount cannot be negative (got {amount})")]
    NegativeAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The transfer is rejected to keep both balances intact.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account identifier
        account: String,
    },

    /// An account with this identifier is already seeded
    #[error("Duplicate account identifier {account}")]
    DuplicateAccount {
        /// The duplicated identifier
        account: String,
    },

    /// File not found at the specified path
    ///
    /// Fatal to the CLI run; processing never starts.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable: the malformed record is skipped and processing
    /// continues with the next record.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for PaymentError {
    fn from(error: std::io::Error) -> Self {
        PaymentError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for PaymentError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        PaymentError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl PaymentError {
    /// Create an InvalidState error
    pub fn invalid_state(account: &str, value: Decimal) -> Self {
        PaymentError::InvalidState {
            account: account.to_string(),
            value,
        }
    }

    /// Create an InvalidFormat error
    pub fn invalid_format(kind: CredentialKind, value: &str) -> Self {
        PaymentError::InvalidFormat {
            kind,
            value: value.to_string(),
        }
    }

    /// Create a CredentialMismatch error
    pub fn credential_mismatch(kind: CredentialKind, account: &str) -> Self {
        PaymentError::CredentialMismatch {
            kind,
            account: account.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, available: Decimal, requested: Decimal) -> Self {
        PaymentError::InsufficientFunds {
            account: account.to_string(),
            available,
            requested,
        }
    }

    /// Create a SelfTransfer error
    pub fn self_transfer(account: &str) -> Self {
        PaymentError::SelfTransfer {
            account: account.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        PaymentError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create a NegativeAmount error
    pub fn negative_amount(amount: Decimal) -> Self {
        PaymentError::NegativeAmount { amount }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        PaymentError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: &str) -> Self {
        PaymentError::DuplicateAccount {
            account: account.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_insufficient_funds_message() {
        let err =
            PaymentError::insufficient_funds("A002", Decimal::new(500, 0), Decimal::new(900, 0));
        assert_eq!(
            err.to_string(),
            "Insufficient funds in account A002: available 500, requested 900"
        );
    }

    #[test]
    fn test_invalid_format_message_names_the_kind() {
        let card = PaymentError::invalid_format(CredentialKind::Card, "123");
        assert_eq!(card.to_string(), "Invalid card number format: '123'");

        let wallet = PaymentError::invalid_format(CredentialKind::Wallet, "invalid");
        assert_eq!(wallet.to_string(), "Invalid wallet email format: 'invalid'");
    }

    #[test]
    fn test_parse_error_with_and_without_line() {
        let with_line = PaymentError::ParseError {
            line: Some(3),
            message: "bad row".to_string(),
        };
        assert_eq!(with_line.to_string(), "CSV parse error at line 3: bad row");

        let without_line = PaymentError::ParseError {
            line: None,
            message: "bad row".to_string(),
        };
        assert_eq!(without_line.to_string(), "CSV parse error: bad row");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PaymentError = io_err.into();
        assert!(matches!(err, PaymentError::IoError { .. }));
    }
}
