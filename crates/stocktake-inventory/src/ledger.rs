//! Append-only activity ledger
//!
//! Mutations notify a write-only [`TransactionLog`] capability rather than a
//! global file handle, so the core stays testable without filesystem IO.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use rust_decimal::Decimal;

/// Write-only sink for completed-mutation notifications
pub trait TransactionLog {
    fn record(&self, message: &str) -> io::Result<()>;
}

impl<T: TransactionLog + ?Sized> TransactionLog for &T {
    fn record(&self, message: &str) -> io::Result<()> {
        (**self).record(message)
    }
}

/// Ledger backed by an append-only text file.
///
/// Each entry is one line, `[YYYY-MM-DD HH:MM:SS] <message>`, in local time.
/// The containing directory is created on first use.
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionLog for FileLedger {
    fn record(&self, message: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(file, "[{timestamp}] {message}")
    }
}

/// Ledger line for an accepted add.
///
/// Records the price the caller supplied, which for replenishment is not
/// necessarily the price that stayed on the record.
pub fn added_message(item: &str, quantity: u64, unit_price: Decimal) -> String {
    format!("Added {quantity} of '{item}' at ${unit_price:.2} each.")
}

/// Ledger line for an accepted removal
pub fn removed_message(item: &str, quantity: u64) -> String {
    format!("Removed {quantity} of '{item}'.")
}
