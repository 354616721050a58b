//! In-memory inventory map and its pure mutations
//!
//! No IO happens here; loading and saving live in [`crate::persistence`].
//! Entries keep their insertion order, which is also the display order.

use rust_decimal::Decimal;

use crate::error::InventoryError;
use crate::types::{InventorySummary, StockRecord, SummaryRow};

/// Insertion-ordered mapping from item name to stock record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    entries: Vec<(String, StockRecord)>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a record by exact (case-sensitive) name
    pub fn get(&self, name: &str) -> Option<&StockRecord> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, record)| record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StockRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Insert or replace a record, keeping the original position on replace.
    /// Used when rebuilding the store from disk; a duplicated name takes the
    /// last row's values, as a mapping rebuilt row by row would.
    pub(crate) fn insert(&mut self, name: String, record: StockRecord) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = record,
            None => self.entries.push((name, record)),
        }
    }

    /// Add incoming stock.
    ///
    /// For an existing item only the quantity grows; the stored unit price is
    /// kept and the supplied one is discarded. A new item is appended with the
    /// supplied price.
    pub fn add_stock(&mut self, name: &str, quantity: u64, unit_price: Decimal) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, record)) => {
                record.quantity += quantity;
                record.recompute_total();
            }
            None => {
                self.entries
                    .push((name.to_string(), StockRecord::new(quantity, unit_price)));
            }
        }
    }

    /// Remove outgoing stock.
    ///
    /// Decrementing to exactly zero deletes the entry, so the map never holds
    /// a zero-quantity record through this path.
    pub fn remove_stock(&mut self, name: &str, quantity: u64) -> Result<(), InventoryError> {
        let position = self
            .entries
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| InventoryError::ItemNotFound(name.to_string()))?;

        let record = &mut self.entries[position].1;
        if record.quantity < quantity {
            return Err(InventoryError::InsufficientStock {
                item: name.to_string(),
                requested: quantity,
                available: record.quantity,
            });
        }

        record.quantity -= quantity;
        record.recompute_total();

        if record.quantity == 0 {
            self.entries.remove(position);
        }
        Ok(())
    }

    /// Valuation summary in iteration order, with the grand total
    pub fn summarize(&self) -> InventorySummary {
        if self.entries.is_empty() {
            return InventorySummary::Empty;
        }

        let mut rows = Vec::with_capacity(self.entries.len());
        let mut grand_total = Decimal::ZERO;
        for (name, record) in &self.entries {
            grand_total += record.total_value;
            rows.push(SummaryRow {
                name: name.clone(),
                quantity: record.quantity,
                unit_price: record.unit_price,
                total_value: record.total_value,
            });
        }
        InventorySummary::Items { rows, grand_total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn add_new_item_derives_total() {
        let mut inventory = Inventory::new();
        inventory.add_stock("Widget", 100, dec("2.50"));

        let record = inventory.get("Widget").unwrap();
        assert_eq!(record.quantity, 100);
        assert_eq!(record.unit_price, dec("2.50"));
        assert_eq!(record.total_value, dec("250.00"));
    }

    #[test]
    fn replenishment_keeps_first_seen_price() {
        let mut inventory = Inventory::new();
        inventory.add_stock("Widget", 100, dec("2.50"));
        inventory.add_stock("Widget", 50, dec("3.00"));

        let record = inventory.get("Widget").unwrap();
        assert_eq!(record.quantity, 150);
        assert_eq!(record.unit_price, dec("2.50"));
        assert_eq!(record.total_value, dec("375.00"));
    }

    #[test]
    fn remove_partial_recomputes_total() {
        let mut inventory = Inventory::new();
        inventory.add_stock("Widget", 100, dec("2.50"));
        inventory.remove_stock("Widget", 40).unwrap();

        let record = inventory.get("Widget").unwrap();
        assert_eq!(record.quantity, 60);
        assert_eq!(record.total_value, dec("150.00"));
    }

    #[test]
    fn remove_to_zero_deletes_entry() {
        let mut inventory = Inventory::new();
        inventory.add_stock("Widget", 100, dec("2.50"));
        inventory.remove_stock("Widget", 100).unwrap();
        assert!(!inventory.contains("Widget"));
        assert!(inventory.is_empty());
    }

    #[test]
    fn remove_more_than_held_fails_and_leaves_quantity() {
        let mut inventory = Inventory::new();
        inventory.add_stock("Widget", 10, dec("1.00"));

        let err = inventory.remove_stock("Widget", 11).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::InsufficientStock {
                requested: 11,
                available: 10,
                ..
            }
        ));
        assert_eq!(inventory.get("Widget").unwrap().quantity, 10);
    }

    #[test]
    fn remove_missing_item_fails() {
        let mut inventory = Inventory::new();
        let err = inventory.remove_stock("Ghost", 1).unwrap_err();
        assert!(matches!(err, InventoryError::ItemNotFound(name) if name == "Ghost"));
    }

    #[test]
    fn summarize_preserves_insertion_order_and_sums() {
        let mut inventory = Inventory::new();
        inventory.add_stock("Bolt", 200, dec("0.10"));
        inventory.add_stock("Anvil", 2, dec("55.00"));

        match inventory.summarize() {
            InventorySummary::Items { rows, grand_total } => {
                assert_eq!(rows[0].name, "Bolt");
                assert_eq!(rows[1].name, "Anvil");
                assert_eq!(grand_total, dec("130.00"));
            }
            InventorySummary::Empty => panic!("store is not empty"),
        }
    }

    #[test]
    fn summarize_empty_store() {
        assert_eq!(Inventory::new().summarize(), InventorySummary::Empty);
    }
}
