use super::Resource;
use crate::error::ClientResult;
use shared::models::{Bill, BillInput};

impl Resource<'_, Bill, BillInput> {
    /// Bills with money still owed
    pub async fn outstanding(&self) -> ClientResult<Vec<Bill>> {
        let bills = self.list().await?;
        Ok(bills
            .into_iter()
            .filter(|b| !b.recompute().is_fully_paid())
            .collect())
    }
}
