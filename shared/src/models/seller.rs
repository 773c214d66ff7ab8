//! Seller Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Seller entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub basic_salary: Decimal,
    /// Flat commission paid per product unit sold
    #[serde(default)]
    pub commission_rate: Decimal,
    #[serde(default)]
    pub total_commission: Decimal,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Seller {
    pub fn commission_for(&self, units: i64) -> Decimal {
        self.commission_rate * Decimal::from(units.max(0))
    }

    /// Salary plus accumulated commission
    pub fn total_earnings(&self) -> Decimal {
        self.basic_salary + self.total_commission
    }
}

/// Create / update seller payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub basic_salary: Decimal,
    pub commission_rate: Decimal,
}

/// Leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(alias = "_id")]
    pub seller_id: String,
    pub name: String,
    #[serde(default)]
    pub units_sold: i64,
    #[serde(default)]
    pub customers: i64,
    #[serde(default)]
    pub commission: Decimal,
}

/// One sale attributed to a seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerSale {
    #[serde(default)]
    pub customer_id: Option<String>,
    pub customer_name: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub commission: Decimal,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Result of a commission preview or backfill run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionSummary {
    #[serde(default)]
    pub sellers_affected: i64,
    #[serde(default)]
    pub customers_scanned: i64,
    #[serde(default)]
    pub units_counted: i64,
    #[serde(default)]
    pub commission_added: Decimal,
}
