//! Purchase batch Model

use super::line::ProductInfo;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product received in a purchase batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    pub product_id: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}

/// Stock received from a supplier with its cost basis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseBatch {
    pub supplier_name: String,
    pub date: NaiveDate,
    pub items: Vec<PurchaseItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PurchaseBatch {
    pub fn total_cost(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| i.unit_price * Decimal::from(i.quantity))
            .sum()
    }

    /// Stock increase per product, repeated products merged in first-seen order
    pub fn stock_increments(&self) -> Vec<ProductInfo> {
        let mut out: Vec<ProductInfo> = Vec::new();
        for item in &self.items {
            match out.iter_mut().find(|p| p.product_id == item.product_id) {
                Some(existing) => existing.quantity += item.quantity,
                None => out.push(ProductInfo::new(item.product_id.clone(), item.quantity)),
            }
        }
        out
    }
}
