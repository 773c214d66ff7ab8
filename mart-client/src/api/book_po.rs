use super::Resource;
use crate::error::ClientResult;
use shared::models::{BookPo, BookPoInput};
use shared::search;

impl Resource<'_, BookPo, BookPoInput> {
    /// Labels whose fields contain `name`, Urdu and English alike
    pub async fn find_by_name(&self, name: &str) -> ClientResult<Vec<BookPo>> {
        let records = self.list().await?;
        Ok(search::filter(&records, name).into_iter().cloned().collect())
    }
}
