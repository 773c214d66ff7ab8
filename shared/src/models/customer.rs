//! Customer Model

use super::line::{Allocations, ProductInfo};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sales channel of a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    #[default]
    Online,
    Offline,
}

/// Seller reference: either a bare id or the populated seller document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SellerRef {
    Id(String),
    Populated {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl SellerRef {
    pub fn id(&self) -> &str {
        match self {
            SellerRef::Id(id) => id,
            SellerRef::Populated { id, .. } => id,
        }
    }
}

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", alias = "customerType", default)]
    pub customer_type: CustomerType,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub seller: Option<SellerRef>,
    #[serde(default)]
    pub products_info: Vec<ProductInfo>,
    /// Legacy single-product name, mirrors the primary line
    #[serde(default)]
    pub product: Option<String>,
    /// Legacy single-product id, mirrors the primary line
    #[serde(default)]
    pub product_id: Option<String>,
    /// Legacy single-product quantity
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Quantities this customer already holds, per product
    ///
    /// Records created before multi-product support only carry the legacy
    /// `productId`; those count as one line of `quantity` (default 1).
    pub fn allocations(&self) -> Allocations {
        if !self.products_info.is_empty() {
            return Allocations::from_lines(&self.products_info);
        }
        let mut alloc = Allocations::new();
        if let Some(id) = &self.product_id {
            alloc.insert(id.clone(), self.quantity.unwrap_or(1));
        }
        alloc
    }

    /// Product lines, falling back to the legacy single product
    pub fn lines(&self) -> Vec<ProductInfo> {
        if !self.products_info.is_empty() {
            return self.products_info.clone();
        }
        self.product_id
            .iter()
            .map(|id| ProductInfo::new(id.clone(), self.quantity.unwrap_or(1)))
            .collect()
    }
}

/// Create / update customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub name: String,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(default)]
    pub products_info: Vec<ProductInfo>,
    /// Legacy mirror of the primary line; always sent so an emptied
    /// selection clears it with `null`
    pub product: Option<String>,
    pub product_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_seller_reference() {
        let c: Customer = serde_json::from_str(
            r#"{"_id":"c1","name":"Ali","type":"offline",
                "seller":{"_id":"s1","name":"Bilal"},
                "productsInfo":[{"productId":"p1","quantity":2}]}"#,
        )
        .unwrap();
        assert_eq!(c.customer_type, CustomerType::Offline);
        assert_eq!(c.seller.as_ref().map(SellerRef::id), Some("s1"));
        assert_eq!(c.allocations().previous("p1"), 2);
    }

    #[test]
    fn test_legacy_single_product_allocation() {
        let c: Customer = serde_json::from_str(
            r#"{"_id":"c2","name":"Sara","seller":"s7","productId":"p4","product":"Iron"}"#,
        )
        .unwrap();
        assert_eq!(c.seller, Some(SellerRef::Id("s7".into())));
        assert_eq!(c.allocations().previous("p4"), 1);
        assert_eq!(c.lines(), vec![ProductInfo::new("p4", 1)]);
    }

    #[test]
    fn test_input_clears_legacy_fields_with_null() {
        let input = CustomerInput {
            name: "Ali".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("productId").is_some_and(|v| v.is_null()));
        assert!(json.get("product").is_some_and(|v| v.is_null()));
        assert!(json.get("phone").is_none());
    }
}
