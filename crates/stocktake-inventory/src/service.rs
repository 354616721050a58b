//! Transactional operation cycle over the persisted store
//!
//! Every operation rebuilds the store from disk, applies at most one
//! mutation, and rewrites the file before notifying the ledger. Nothing is
//! cached across operations and no file handle outlives a call.
//!
//! Validation runs before the mutation step, so a failed operation leaves
//! both memory and disk untouched.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::InventoryError;
use crate::input;
use crate::ledger::{self, TransactionLog};
use crate::persistence;
use crate::types::InventorySummary;

/// Drives load -> parse -> mutate -> save -> log for each request
pub struct InventoryService<L: TransactionLog> {
    inventory_file: PathBuf,
    ledger: L,
}

impl<L: TransactionLog> InventoryService<L> {
    pub fn new(inventory_file: impl Into<PathBuf>, ledger: L) -> Self {
        Self {
            inventory_file: inventory_file.into(),
            ledger,
        }
    }

    /// Add incoming stock from raw prompt text.
    ///
    /// For an existing item the stored unit price wins; the supplied price is
    /// still the one written to the ledger.
    pub fn add_stock(
        &self,
        name: &str,
        quantity: &str,
        unit_price: &str,
    ) -> Result<(), InventoryError> {
        let name = input::parse_item_name(name)?;
        let quantity = input::parse_quantity(quantity)?;
        let unit_price = input::parse_unit_price(unit_price)?;

        let mut inventory = persistence::load(&self.inventory_file)?;
        inventory.add_stock(&name, quantity, unit_price);
        persistence::save(&self.inventory_file, &inventory)?;

        info!(item = %name, quantity, "stock added");
        self.notify(&ledger::added_message(&name, quantity, unit_price));
        Ok(())
    }

    /// Remove outgoing stock from raw prompt text.
    ///
    /// Checks run in order: the item must exist, the quantity must be an
    /// integer, strictly positive, and not exceed the holding.
    pub fn remove_stock(&self, name: &str, quantity: &str) -> Result<(), InventoryError> {
        let name = name.trim();
        let mut inventory = persistence::load(&self.inventory_file)?;
        if !inventory.contains(name) {
            return Err(InventoryError::ItemNotFound(name.to_string()));
        }

        let requested = input::parse_removal_quantity(quantity)?;
        if requested <= 0 {
            return Err(InventoryError::InvalidQuantity(requested));
        }

        inventory.remove_stock(name, requested as u64)?;
        persistence::save(&self.inventory_file, &inventory)?;

        info!(item = %name, quantity = requested, "stock removed");
        self.notify(&ledger::removed_message(name, requested as u64));
        Ok(())
    }

    /// Valuation summary of the persisted store; no side effects
    pub fn view(&self) -> Result<InventorySummary, InventoryError> {
        let inventory = persistence::load(&self.inventory_file)?;
        Ok(inventory.summarize())
    }

    // The mutation is already durable when the ledger is notified; a failed
    // append must not fail the operation.
    fn notify(&self, message: &str) {
        if let Err(err) = self.ledger.record(message) {
            warn!(%err, "activity ledger append failed");
        }
    }
}
