use super::Resource;
use crate::error::ClientResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{Expense, ExpenseInput, FinanceStats, Income, IncomeInput};
use shared::request::DateRange;

impl<T, I> Resource<'_, T, I>
where
    T: DeserializeOwned,
    I: Serialize + Sync,
{
    async fn list_in(&self, range: &DateRange) -> ClientResult<Vec<T>> {
        if range.is_unbounded() {
            return self.list().await;
        }
        self.http.get_query(self.path, range).await
    }

    async fn stats_in(&self, range: &DateRange) -> ClientResult<FinanceStats> {
        self.http
            .get_query(&format!("{}/stats", self.path), range)
            .await
    }
}

impl Resource<'_, Expense, ExpenseInput> {
    pub async fn list_range(&self, range: &DateRange) -> ClientResult<Vec<Expense>> {
        self.list_in(range).await
    }

    pub async fn stats(&self, range: &DateRange) -> ClientResult<FinanceStats> {
        self.stats_in(range).await
    }
}

impl Resource<'_, Income, IncomeInput> {
    pub async fn list_range(&self, range: &DateRange) -> ClientResult<Vec<Income>> {
        self.list_in(range).await
    }

    pub async fn stats(&self, range: &DateRange) -> ClientResult<FinanceStats> {
        self.stats_in(range).await
    }
}
