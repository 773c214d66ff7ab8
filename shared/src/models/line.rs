//! Product line references shared by customers, parcels and bills

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `{productId, quantity}` entry of a multi-product record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub product_id: String,
    pub quantity: i64,
}

impl ProductInfo {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Quantity already committed per product on an existing record
///
/// Empty for records that are being created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocations(HashMap<String, i64>);

impl Allocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum quantities per product id
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a ProductInfo>) -> Self {
        let mut map = HashMap::new();
        for line in lines {
            *map.entry(line.product_id.clone()).or_insert(0) += line.quantity;
        }
        Self(map)
    }

    pub fn insert(&mut self, product_id: impl Into<String>, quantity: i64) {
        self.0.insert(product_id.into(), quantity);
    }

    /// Previously allocated quantity, 0 when the product was not on the record
    pub fn previous(&self, product_id: &str) -> i64 {
        self.0.get(product_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocations_sum_duplicate_lines() {
        let lines = vec![
            ProductInfo::new("a", 2),
            ProductInfo::new("b", 1),
            ProductInfo::new("a", 3),
        ];
        let alloc = Allocations::from_lines(&lines);
        assert_eq!(alloc.previous("a"), 5);
        assert_eq!(alloc.previous("b"), 1);
        assert_eq!(alloc.previous("missing"), 0);
    }

    #[test]
    fn test_product_info_wire_format() {
        let json = serde_json::to_string(&ProductInfo::new("p9", 4)).unwrap();
        assert_eq!(json, r#"{"productId":"p9","quantity":4}"#);
    }
}
