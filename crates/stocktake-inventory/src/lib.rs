//! Persistent single-user inventory store for stocktake
//!
//! # Features
//! - Insertion-ordered item map rebuilt from disk for every operation
//! - Full-file replace persistence with atomic temp-then-rename writes
//! - High-precision prices (Decimal) with two-decimal formatting on disk
//! - Append-only, timestamped activity ledger behind a narrow trait

pub mod error;
pub mod input;
pub mod ledger;
pub mod persistence;
pub mod service;
pub mod store;
pub mod types;

pub use error::InventoryError;
pub use ledger::{FileLedger, TransactionLog};
pub use persistence::PersistenceError;
pub use service::InventoryService;
pub use store::Inventory;
pub use types::{InventorySummary, StockRecord, SummaryRow};
