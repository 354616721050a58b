//! Inventory error types

use thiserror::Error;

use crate::persistence::PersistenceError;

/// Errors reported by inventory operations
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Item not found in inventory: {0}")]
    ItemNotFound(String),

    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    #[error("Not enough stock of '{item}': requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: u64,
        available: u64,
    },

    #[error("Storage error: {0}")]
    Persistence(#[from] PersistenceError),
}
