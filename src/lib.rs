//! Payments Ledger Library
//! # Overview
//!
//! This library models a minimal ledger of accounts that move funds
//! between each other through two credential-checked payment channels:
//! card-backed and wallet-backed.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, PaymentRequest, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account collection and the funds-transfer
//!     primitive
//!   - [`core::processor`] - Payment request factory, counter, and the
//!     channel validation gate
//!   - [`core::validation`] - Static credential format rules
//!   - [`core::traits`] - Capability traits at the component seams
//! - [`io`] - CSV input/output for the CLI glue layer
//! - [`pipeline`] - Batch orchestration for the binary and tests
//!
//! # Payment Contract
//!
//! Every payment goes through the same gate before it may touch balances:
//!
//! 1. **Format**: the credential must satisfy its channel's static rule
//!    (16 digits for card, `@` and `.` for wallet) before any account is
//!    looked up.
//! 2. **Match**: the credential must equal the value stored on the source
//!    account.
//! 3. **Transfer**: the ledger enforces the non-negative balance
//!    invariant; either both sides commit (balances and history) or
//!    neither does.
//!
//! A failed payment is a normal `false` outcome, never a panic or a hard
//! error; only direct state mutation (setters, construction) raises
//! errors.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{CardVerifiable, Ledger, PaymentProcessor, Transferable, WalletVerifiable};
pub use io::write_accounts_csv;
pub use types::{Account, AccountId, Credential, CredentialKind, PaymentError, PaymentRequest};
