//! Product Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price tier a line item can be billed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Original,
    Wholesale,
    Retail,
    Website,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub original_price: Decimal,
    #[serde(default)]
    pub wholesale_price: Decimal,
    #[serde(default)]
    pub retail_price: Decimal,
    #[serde(default)]
    pub website_price: Decimal,
    /// Units on hand, authoritative on the server
    #[serde(default)]
    pub stock: i64,
    /// At or below this count the product is reported as low stock
    #[serde(default)]
    pub low_stock_threshold: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Price for the given tier
    pub fn price(&self, tier: PriceTier) -> Decimal {
        match tier {
            PriceTier::Original => self.original_price,
            PriceTier::Wholesale => self.wholesale_price,
            PriceTier::Retail => self.retail_price,
            PriceTier::Website => self.website_price,
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.low_stock_threshold
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// "Name (Model)" label used in selectors and notices
    pub fn label(&self) -> String {
        if self.model.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.model)
        }
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub model: String,
    pub category: Option<String>,
    pub original_price: Decimal,
    pub wholesale_price: Decimal,
    pub retail_price: Decimal,
    pub website_price: Decimal,
    pub stock: i64,
    pub low_stock_threshold: Option<i64>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wholesale_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<i64>,
}

/// Add-stock payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdd {
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One stock movement in a product's history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHistoryEntry {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    /// Positive for additions, negative for allocations
    pub change: i64,
    #[serde(default)]
    pub stock_after: Option<i64>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create / update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
