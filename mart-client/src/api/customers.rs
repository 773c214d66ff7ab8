use super::Resource;
use crate::error::ClientResult;
use shared::models::{Customer, CustomerInput, CustomerType};

impl Resource<'_, Customer, CustomerInput> {
    /// Customers of one type, in backend order
    pub async fn list_by_type(&self, customer_type: CustomerType) -> ClientResult<Vec<Customer>> {
        let all = self.list().await?;
        Ok(all
            .into_iter()
            .filter(|c| c.customer_type == customer_type)
            .collect())
    }
}
