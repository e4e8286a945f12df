//! Streaming CSV readers for account seeds and payment rows
//!
//! Both readers wrap `csv::Reader` with an iterator interface, delegating
//! format concerns to the `csv_format` module. Records are read one at a
//! time; a file never needs to fit in memory.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as `Err` variants in the
//!   iterator, with line numbers for debugging, so one malformed row never
//!   aborts the batch

use crate::io::csv_format::{
    convert_account_record, convert_payment_record, AccountCsvRecord, PaymentCsvRecord,
    PaymentInstruction,
};
use crate::types::Account;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

fn open_csv(path: &Path) -> Result<csv::Reader<File>, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

    Ok(ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .buffer_capacity(8 * 1024)
        .from_reader(file))
}

/// Streaming reader over account seed rows
///
/// Yields `Result<Account, String>` per CSV row. Rows that fail parsing
/// or account validation come back as `Err` with a line number.
///
/// # Examples
///
/// ```no_run
/// use payments_ledger::io::reader::AccountReader;
/// use std::path::Path;
///
/// let reader = AccountReader::new(Path::new("accounts.csv")).unwrap();
/// for result in reader {
///     match result {
///         Ok(account) => println!("Seeded account {}", account.id()),
///         Err(e) => eprintln!("Error: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct AccountReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl AccountReader {
    /// Open an account seed file for streaming iteration
    ///
    /// # Errors
    ///
    /// Returns an error string if the file could not be opened.
    pub fn new(path: &Path) -> Result<Self, String> {
        Ok(Self {
            reader: open_csv(path)?,
            line_num: 0,
        })
    }
}

impl Iterator for AccountReader {
    type Item = Result<Account, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<AccountCsvRecord>();

        match deserializer.next()? {
            Ok(csv_record) => {
                self.line_num += 1;
                Some(
                    convert_account_record(csv_record)
                        .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}

/// Streaming reader over payment rows
///
/// Yields `Result<PaymentInstruction, String>` per CSV row. Malformed
/// rows come back as `Err` with a line number; credential validation is
/// left to the processor.
#[derive(Debug)]
pub struct PaymentReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl PaymentReader {
    /// Open a payment file for streaming iteration
    ///
    /// # Errors
    ///
    /// Returns an error string if the file could not be opened.
    pub fn new(path: &Path) -> Result<Self, String> {
        Ok(Self {
            reader: open_csv(path)?,
            line_num: 0,
        })
    }
}

impl Iterator for PaymentReader {
    type Item = Result<PaymentInstruction, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<PaymentCsvRecord>();

        match deserializer.next()? {
            Ok(csv_record) => {
                self.line_num += 1;
                Some(
                    convert_payment_record(csv_record)
                        .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}
