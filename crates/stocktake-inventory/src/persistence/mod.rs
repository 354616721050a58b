//! Persistence layer for the inventory store
//!
//! The store lives in a single comma-separated file with a header row. Every
//! save is a full-file replace through a temp file renamed into place, so a
//! crash mid-write leaves the previous file intact.

pub mod file;
pub mod format;

pub use file::{load, save};

use thiserror::Error;

/// Persistence errors
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed inventory row at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
