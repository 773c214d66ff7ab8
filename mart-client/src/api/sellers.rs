use super::Resource;
use crate::error::ClientResult;
use shared::models::{CommissionSummary, LeaderboardEntry, Seller, SellerInput, SellerSale};
use shared::request::DateRange;

impl Resource<'_, Seller, SellerInput> {
    /// Sellers ranked by units sold within `range`
    pub async fn leaderboard(&self, range: &DateRange) -> ClientResult<Vec<LeaderboardEntry>> {
        self.http.get_query("sellers/leaderboard", range).await
    }

    pub async fn sales_history(&self, seller_id: &str) -> ClientResult<Vec<SellerSale>> {
        self.http
            .get(&format!("sellers/{}/sales", seller_id))
            .await
    }

    /// What a backfill would credit, without writing anything
    pub async fn commission_preview(&self) -> ClientResult<CommissionSummary> {
        self.http.get("sellers/commission/preview").await
    }

    /// Credit commission for customers recorded before commission tracking
    pub async fn commission_backfill(&self) -> ClientResult<CommissionSummary> {
        let summary: CommissionSummary = self.http.post_empty("sellers/commission/backfill").await?;
        tracing::info!(
            sellers = summary.sellers_affected,
            units = summary.units_counted,
            "commission backfill applied"
        );
        Ok(summary)
    }
}
