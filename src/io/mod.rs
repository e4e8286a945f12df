//! I/O module
//!
//! Handles CSV parsing and output for the CLI glue layer. The core never
//! prints or reads files; everything here sits outside the ledger and
//! processor contracts.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output
//!   serialization)
//! - `reader` - Streaming CSV readers with iterator interfaces

pub mod csv_format;
pub mod reader;

pub use csv_format::{
    convert_account_record, convert_payment_record, write_accounts_csv, AccountCsvRecord,
    PaymentCsvRecord, PaymentInstruction,
};
pub use reader::{AccountReader, PaymentReader};
