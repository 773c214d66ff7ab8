//! Query-string types sent with list requests

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date filter for finance and dashboard endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
        }
    }

    /// Whole-history range (no bounds sent)
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// Whether `day` falls inside the range
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start_date.is_none_or(|s| day >= s) && self.end_date.is_none_or(|e| day <= e)
    }
}
