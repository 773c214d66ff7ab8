//! Ad spend and daily dispatch counts, one record per date

use crate::error::ClientResult;
use crate::http::HttpClient;
use rust_decimal::Decimal;
use shared::error::AppError;
use shared::models::{AdSpend, DispatchRecord};
use shared::request::DateRange;

pub struct MarketingApi<'a> {
    http: &'a HttpClient,
}

impl<'a> MarketingApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn ad_spend(&self, range: &DateRange) -> ClientResult<Vec<AdSpend>> {
        self.http.get_query("ad-spend", range).await
    }

    /// Create or replace the ad spend for `record.date`
    pub async fn upsert_ad_spend(&self, record: &AdSpend) -> ClientResult<AdSpend> {
        if record.amount < Decimal::ZERO {
            return Err(AppError::validation("Amount cannot be negative").into());
        }
        self.http.post("ad-spend", record).await
    }

    pub async fn dispatches(&self, range: &DateRange) -> ClientResult<Vec<DispatchRecord>> {
        self.http.get_query("dispatch", range).await
    }

    /// Create or replace the dispatch count for `record.date`
    pub async fn upsert_dispatch(&self, record: &DispatchRecord) -> ClientResult<DispatchRecord> {
        if record.parcels_dispatched < 0 {
            return Err(AppError::validation("Parcel count cannot be negative").into());
        }
        self.http.post("dispatch", record).await
    }
}
