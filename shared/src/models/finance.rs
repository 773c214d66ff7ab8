//! Expense and income Models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    #[serde(alias = "_id")]
    pub id: String,
    pub source: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create income payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeInput {
    pub source: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Per-category sum inside [`FinanceStats`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    #[serde(alias = "_id")]
    pub category: String,
    pub total: Decimal,
}

/// Aggregates returned by the expense / income stats endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceStats {
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub this_month: Decimal,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub by_category: Vec<CategoryTotal>,
}
