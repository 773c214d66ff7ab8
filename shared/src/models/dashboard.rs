//! Dashboard Models
//!
//! The backend pre-aggregates everything; the only client-side arithmetic is
//! the revenue share percentage shown on pie-chart labels.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_revenue: Decimal,
    #[serde(default)]
    pub online_revenue: Decimal,
    #[serde(default)]
    pub offline_revenue: Decimal,
    #[serde(default)]
    pub parcel_revenue: Decimal,
    #[serde(default)]
    pub total_expenses: Decimal,
    #[serde(default)]
    pub total_income: Decimal,
    #[serde(default)]
    pub total_products: i64,
    #[serde(default)]
    pub total_customers: i64,
    #[serde(default)]
    pub low_stock_count: i64,
    #[serde(default)]
    pub pending_parcels: i64,
}

/// One day of the seven-day series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: NaiveDate,
    #[serde(default)]
    pub revenue: Decimal,
    #[serde(default)]
    pub orders: i64,
}

/// Pie-chart segment with its label percentage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueShare {
    pub label: &'static str,
    pub amount: Decimal,
    pub percent: Decimal,
}

/// `segment / total * 100` rounded to one decimal; 0 when total is not positive
pub fn share_percent(segment: Decimal, total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (segment / total * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

impl DashboardStats {
    /// Revenue split by channel, relative to `total_revenue`
    pub fn revenue_breakdown(&self) -> Vec<RevenueShare> {
        [
            ("Online", self.online_revenue),
            ("Offline", self.offline_revenue),
            ("Parcels", self.parcel_revenue),
        ]
        .into_iter()
        .map(|(label, amount)| RevenueShare {
            label,
            amount,
            percent: share_percent(amount, self.total_revenue),
        })
        .collect()
    }

    pub fn net_profit(&self) -> Decimal {
        self.total_revenue + self.total_income - self.total_expenses
    }
}
