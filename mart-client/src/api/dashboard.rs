use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{DailyPoint, DashboardStats};
use shared::request::DateRange;

pub struct DashboardApi<'a> {
    http: &'a HttpClient,
}

impl<'a> DashboardApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Pre-aggregated totals
    pub async fn stats(&self, range: &DateRange) -> ClientResult<DashboardStats> {
        self.http.get_query("dashboard/stats", range).await
    }

    /// Last seven days, oldest first
    pub async fn seven_day_series(&self) -> ClientResult<Vec<DailyPoint>> {
        let mut points: Vec<DailyPoint> = self.http.get("dashboard/weekly").await?;
        points.sort_by_key(|p| p.date);
        Ok(points)
    }
}
