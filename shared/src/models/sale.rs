//! Sale and return Models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Counter sale record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(alias = "_id")]
    pub id: String,
    pub product_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i64,
    pub unit_price: Decimal,
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub seller_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create sale payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInput {
    pub product_id: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
}

/// Returned goods record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub sale_id: Option<String>,
    pub product_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i64,
    #[serde(default)]
    pub refund_amount: Decimal,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create return payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_id: Option<String>,
    pub product_id: String,
    pub quantity: i64,
    pub refund_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
