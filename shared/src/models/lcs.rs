//! LCS courier parcel Model (read-only mirror of courier data)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcsParcel {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub tracking_number: String,
    #[serde(default)]
    pub consignee_name: Option<String>,
    #[serde(default)]
    pub consignee_phone: Option<String>,
    #[serde(default)]
    pub destination_city: Option<String>,
    #[serde(default)]
    pub cod_amount: Decimal,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub booked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_synced_at: Option<DateTime<Utc>>,
}

/// Counts reported by a courier sync run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSummary {
    #[serde(default)]
    pub fetched: i64,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub updated: i64,
}
