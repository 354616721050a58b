//! Free-text input parsing
//!
//! Explicit parse-to-result functions for the values the caller collects as
//! raw prompt text. Parse failures report [`InventoryError::InvalidInput`]
//! without touching the store.

use rust_decimal::Decimal;

use crate::error::InventoryError;

/// Trim an item name and reject values the persisted format cannot hold.
///
/// The inventory file is unquoted comma-separated text, so names must be
/// non-empty and free of `,`, CR, and LF.
pub fn parse_item_name(raw: &str) -> Result<String, InventoryError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(InventoryError::InvalidInput(
            "item name cannot be empty".to_string(),
        ));
    }
    if name.contains([',', '\r', '\n']) {
        return Err(InventoryError::InvalidInput(format!(
            "item name cannot contain commas or line breaks: {name:?}"
        )));
    }
    Ok(name.to_string())
}

/// Parse an incoming-stock quantity as a non-negative integer
pub fn parse_quantity(raw: &str) -> Result<u64, InventoryError> {
    raw.trim().parse::<u64>().map_err(|_| {
        InventoryError::InvalidInput(format!("quantity must be a non-negative integer: {raw:?}"))
    })
}

/// Parse a removal quantity.
///
/// Signed on purpose: a non-positive value is a distinct failure
/// ([`InventoryError::InvalidQuantity`], checked by the caller) from text
/// that is not a number at all.
pub fn parse_removal_quantity(raw: &str) -> Result<i64, InventoryError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InventoryError::InvalidInput(format!("quantity must be an integer: {raw:?}")))
}

/// Parse a unit price as a non-negative decimal
pub fn parse_unit_price(raw: &str) -> Result<Decimal, InventoryError> {
    let price = raw.trim().parse::<Decimal>().map_err(|_| {
        InventoryError::InvalidInput(format!("unit price must be a decimal number: {raw:?}"))
    })?;
    if price < Decimal::ZERO {
        return Err(InventoryError::InvalidInput(format!(
            "unit price cannot be negative: {raw:?}"
        )));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_name_is_trimmed() {
        assert_eq!(parse_item_name("  Widget  ").unwrap(), "Widget");
    }

    #[test]
    fn empty_item_name_rejected() {
        assert!(matches!(
            parse_item_name("   "),
            Err(InventoryError::InvalidInput(_))
        ));
    }

    #[test]
    fn comma_in_item_name_rejected() {
        assert!(parse_item_name("Widget, Large").is_err());
    }

    #[test]
    fn quantity_accepts_zero_and_rejects_negatives() {
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity(" 42 ").unwrap(), 42);
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("ten").is_err());
        assert!(parse_quantity("1.5").is_err());
    }

    #[test]
    fn removal_quantity_keeps_sign() {
        assert_eq!(parse_removal_quantity("-3").unwrap(), -3);
        assert!(parse_removal_quantity("three").is_err());
    }

    #[test]
    fn unit_price_parses_decimals() {
        assert_eq!(parse_unit_price("2.50").unwrap(), "2.50".parse().unwrap());
        assert_eq!(parse_unit_price("3").unwrap(), "3".parse().unwrap());
        assert!(parse_unit_price("-0.01").is_err());
        assert!(parse_unit_price("free").is_err());
    }
}
