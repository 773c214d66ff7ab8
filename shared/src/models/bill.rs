//! Bill Model

use super::line::{Allocations, ProductInfo};
use super::product::PriceTier;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Customer snapshot stored on the bill
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillCustomer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Bill line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub model: String,
    pub selected_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_tier: Option<PriceTier>,
    pub quantity: i64,
}

impl BillItem {
    pub fn line_total(&self) -> Decimal {
        self.selected_price * Decimal::from(self.quantity)
    }
}

/// Computed money fields of a bill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BillTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub amount_paid: Decimal,
    pub remaining_amount: Decimal,
}

impl BillTotals {
    /// `total = max(subtotal - discount, 0)`, `remaining = max(total - paid, 0)`
    pub fn compute(items: &[BillItem], discount: Decimal, amount_paid: Decimal) -> Self {
        let subtotal: Decimal = items.iter().map(BillItem::line_total).sum();
        let total = (subtotal - discount).max(Decimal::ZERO);
        let remaining_amount = (total - amount_paid).max(Decimal::ZERO);
        Self {
            subtotal,
            discount,
            total,
            amount_paid,
            remaining_amount,
        }
    }

    pub fn is_fully_paid(&self) -> bool {
        self.remaining_amount.is_zero()
    }
}

/// Bill entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub bill_number: Option<String>,
    pub customer: BillCustomer,
    #[serde(default)]
    pub items: Vec<BillItem>,
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub amount_paid: Decimal,
    #[serde(default)]
    pub remaining_amount: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Bill {
    pub fn allocations(&self) -> Allocations {
        let lines: Vec<ProductInfo> = self
            .items
            .iter()
            .map(|i| ProductInfo::new(i.product_id.clone(), i.quantity))
            .collect();
        Allocations::from_lines(&lines)
    }

    /// Totals recomputed from the line items
    pub fn recompute(&self) -> BillTotals {
        BillTotals::compute(&self.items, self.discount, self.amount_paid)
    }
}

/// Create / update bill payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillInput {
    pub customer: BillCustomer,
    pub items: Vec<BillItem>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub amount_paid: Decimal,
    pub remaining_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BillInput {
    /// Build a payload with totals derived from `items`
    pub fn new(
        customer: BillCustomer,
        items: Vec<BillItem>,
        discount: Decimal,
        amount_paid: Decimal,
        notes: Option<String>,
    ) -> Self {
        let totals = BillTotals::compute(&items, discount, amount_paid);
        Self {
            customer,
            items,
            subtotal: totals.subtotal,
            discount: totals.discount,
            total: totals.total,
            amount_paid: totals.amount_paid,
            remaining_amount: totals.remaining_amount,
            notes,
        }
    }
}
