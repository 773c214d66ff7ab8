//! Book PO print record Model

use super::customer::{CustomerInput, CustomerType};
use super::parcel::ParcelInput;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Saved printable shipping label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPo {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub cod_amount: Option<Decimal>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl BookPo {
    fn full_address(&self) -> Option<String> {
        match (&self.address, &self.city) {
            (Some(a), Some(c)) if !c.is_empty() => Some(format!("{}, {}", a, c)),
            (Some(a), _) => Some(a.clone()),
            (None, Some(c)) => Some(c.clone()),
            (None, None) => None,
        }
    }

    /// Parcel form pre-filled from this label
    pub fn to_parcel_draft(&self) -> ParcelInput {
        ParcelInput {
            tracking_number: self.tracking_number.clone(),
            customer_name: self.name.clone(),
            customer_phone: self.phone.clone(),
            customer_address: self.full_address(),
            cod_amount: self.cod_amount.unwrap_or_default(),
            book_po: Some(self.id.clone()),
            ..Default::default()
        }
    }

    /// Online customer form pre-filled from this label
    pub fn to_customer_draft(&self) -> CustomerInput {
        CustomerInput {
            name: self.name.clone(),
            customer_type: CustomerType::Online,
            phone: self.phone.clone(),
            address: self.full_address(),
            price: self.cod_amount,
            tracking_number: self.tracking_number.clone(),
            ..Default::default()
        }
    }
}

/// Create / update Book PO payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPoInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}
