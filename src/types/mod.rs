//! Core data types for the payments ledger
//!
//! - `account` - Account state: balance, credentials, history
//! - `payment` - Payment requests and channel credentials
//! - `error` - Error types for all layers

pub mod account;
pub mod error;
pub mod payment;

pub use account::Account;
pub use error::PaymentError;
pub use payment::{AccountId, Credential, CredentialKind, PaymentRequest};
