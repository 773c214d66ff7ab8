//! Parcel (post office dispatch) Model

use super::line::{Allocations, ProductInfo};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Delivery state of a parcel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelStatus {
    #[default]
    Processing,
    Delivered,
    Return,
}

/// COD settlement state of a parcel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
}

/// Parcel entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub tracking_number: Option<String>,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub cod_amount: Decimal,
    #[serde(default)]
    pub status: ParcelStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub products_info: Vec<ProductInfo>,
    /// Legacy single-product fields mirrored from the primary line
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    /// Book PO print record this parcel was filled from
    #[serde(default)]
    pub book_po: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Parcel {
    pub fn allocations(&self) -> Allocations {
        if self.products_info.is_empty()
            && let Some(id) = &self.product_id
        {
            let mut alloc = Allocations::new();
            alloc.insert(id.clone(), 1);
            return alloc;
        }
        Allocations::from_lines(&self.products_info)
    }

    pub fn is_settled(&self) -> bool {
        self.status == ParcelStatus::Delivered && self.payment_status == PaymentStatus::Paid
    }
}

/// Create / update parcel payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
    pub cod_amount: Decimal,
    pub status: ParcelStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub products_info: Vec<ProductInfo>,
    /// Legacy mirror of the primary line; always sent so an emptied
    /// selection clears it with `null`
    pub product: Option<String>,
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_po: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Status patch payload; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelStatusPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ParcelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}
