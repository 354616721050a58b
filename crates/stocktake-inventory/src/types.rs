//! Inventory data types
//!
//! Prices use 128-bit fixed-point decimals for financial precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock held for a single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Units on hand
    pub quantity: u64,
    /// Price per unit; fixed at first sight of the item
    pub unit_price: Decimal,
    /// Stored redundantly; equals `quantity * unit_price` after every mutation
    pub total_value: Decimal,
}

impl StockRecord {
    /// Create a record with its total derived from quantity and unit price
    pub fn new(quantity: u64, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            total_value: Decimal::from(quantity) * unit_price,
        }
    }

    /// Re-derive `total_value` after a quantity change
    pub(crate) fn recompute_total(&mut self) {
        self.total_value = Decimal::from(self.quantity) * self.unit_price;
    }
}

/// One line of the valuation summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub name: String,
    pub quantity: u64,
    pub unit_price: Decimal,
    pub total_value: Decimal,
}

/// Valuation view over the whole store, in iteration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySummary {
    /// The store holds no items; callers render a distinct empty message
    Empty,
    Items {
        rows: Vec<SummaryRow>,
        grand_total: Decimal,
    },
}
