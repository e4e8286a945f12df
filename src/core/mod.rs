//! Core business logic module
//!
//! This module contains the payment validation and transfer components:
//! - `validation` - Static credential format rules (pure functions)
//! - `traits` - Capability traits for verification and transfer
//! - `ledger` - Account collection and the funds-transfer primitive
//! - `processor` - Payment request factory, counter, and validation gate

pub mod ledger;
pub mod processor;
pub mod traits;
pub mod validation;

pub use ledger::Ledger;
pub use processor::PaymentProcessor;
pub use traits::{CardVerifiable, Transferable, WalletVerifiable};
