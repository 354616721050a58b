//! Row codec for the inventory file
//!
//! ```text
//! Item Name,Quantity,Unit Price,Total Price
//! Widget,100,2.50,250.00
//! ```
//!
//! Quantity is a bare integer; prices carry exactly two fractional digits on
//! write and accept any parseable decimal on read. Item names are stored
//! unquoted, which the input layer guarantees is safe.

use rust_decimal::Decimal;

use super::{PersistenceError, Result};
use crate::types::StockRecord;

/// Mandatory first line of the inventory file
pub const HEADER: &str = "Item Name,Quantity,Unit Price,Total Price";

const FIELDS_PER_ROW: usize = 4;

/// Encode one item as a data row
pub fn encode_row(name: &str, record: &StockRecord) -> String {
    format!(
        "{},{},{:.2},{:.2}",
        name, record.quantity, record.unit_price, record.total_value
    )
}

/// Decode one data row.
///
/// Any defect is fatal for the whole load; there is no lenient row skipping.
pub fn parse_row(line: &str, line_no: usize) -> Result<(String, StockRecord)> {
    let malformed = |reason: String| PersistenceError::MalformedRecord {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELDS_PER_ROW {
        return Err(malformed(format!(
            "expected {} comma-separated fields, got {}",
            FIELDS_PER_ROW,
            fields.len()
        )));
    }

    let name = fields[0].to_string();
    if name.is_empty() {
        return Err(malformed("empty item name".to_string()));
    }

    let quantity = fields[1]
        .parse::<u64>()
        .map_err(|_| malformed(format!("non-integer quantity {:?}", fields[1])))?;
    let unit_price = fields[2]
        .parse::<Decimal>()
        .map_err(|_| malformed(format!("non-numeric unit price {:?}", fields[2])))?;
    let total_value = fields[3]
        .parse::<Decimal>()
        .map_err(|_| malformed(format!("non-numeric total price {:?}", fields[3])))?;

    Ok((
        name,
        StockRecord {
            quantity,
            unit_price,
            total_value,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_writes_two_decimal_prices() {
        let record = StockRecord::new(100, "2.5".parse().unwrap());
        assert_eq!(encode_row("Widget", &record), "Widget,100,2.50,250.00");
    }

    #[test]
    fn parse_round_trips_encoded_row() {
        let record = StockRecord::new(3, "19.99".parse().unwrap());
        let line = encode_row("Gasket", &record);
        let (name, parsed) = parse_row(&line, 2).unwrap();
        assert_eq!(name, "Gasket");
        assert_eq!(parsed, record);
    }

    #[test]
    fn parse_accepts_any_decimal_precision_on_read() {
        let (_, record) = parse_row("Widget,5,2.5,12.5", 2).unwrap();
        assert_eq!(record.unit_price, "2.5".parse().unwrap());
    }

    #[test]
    fn parse_rejects_wrong_field_count() {
        let err = parse_row("Widget,100,2.50", 7).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::MalformedRecord { line: 7, .. }
        ));
    }

    #[test]
    fn parse_rejects_non_numeric_fields() {
        assert!(parse_row("Widget,many,2.50,250.00", 2).is_err());
        assert!(parse_row("Widget,100,cheap,250.00", 2).is_err());
        assert!(parse_row("Widget,100,2.50,a lot", 2).is_err());
        assert!(parse_row("Widget,-5,2.50,250.00", 2).is_err());
    }
}
