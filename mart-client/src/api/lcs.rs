//! LCS courier parcels (read-only mirror)

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use shared::error::AppError;
use shared::models::{LcsParcel, SyncSummary};

pub struct LcsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> LcsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<LcsParcel>> {
        self.http.get("lcs/parcels").await
    }

    /// Pull the latest bookings from the courier
    pub async fn sync(&self) -> ClientResult<SyncSummary> {
        let summary: SyncSummary = self.http.post_empty("lcs/sync").await?;
        tracing::info!(
            fetched = summary.fetched,
            created = summary.created,
            updated = summary.updated,
            "LCS sync finished"
        );
        Ok(summary)
    }

    /// Parcel by tracking number, `None` when the courier has no record
    pub async fn lookup(&self, tracking_number: &str) -> ClientResult<Option<LcsParcel>> {
        let tracking_number = tracking_number.trim();
        if tracking_number.is_empty() {
            return Err(AppError::required("Tracking number").into());
        }
        match self
            .http
            .get(&format!("lcs/track/{}", tracking_number))
            .await
        {
            Ok(parcel) => Ok(Some(parcel)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
