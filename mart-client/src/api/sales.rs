use super::Resource;
use crate::error::ClientResult;
use shared::error::{AppError, ErrorCode};
use shared::models::{ReturnInput, ReturnRecord, Sale, SaleInput};

impl Resource<'_, Sale, SaleInput> {
    /// Direct link to the backend-rendered PDF invoice
    pub fn invoice_url(&self, sale_id: &str) -> String {
        self.http.url(&format!("sales/{}/invoice", sale_id))
    }

    /// Create a sale after local quantity checks
    pub async fn record(&self, input: &SaleInput) -> ClientResult<Sale> {
        if input.quantity < 1 {
            return Err(AppError::invalid_quantity().into());
        }
        self.create(input).await
    }
}

impl Resource<'_, ReturnRecord, ReturnInput> {
    /// Create a return, refusing more units than the sale had
    pub async fn record_against(&self, sale: &Sale, input: &ReturnInput) -> ClientResult<ReturnRecord> {
        if input.quantity < 1 {
            return Err(AppError::invalid_quantity().into());
        }
        if input.quantity > sale.quantity {
            return Err(AppError::with_message(
                ErrorCode::ReturnExceedsSale,
                format!(
                    "Cannot return {} units, only {} were sold",
                    input.quantity, sale.quantity
                ),
            )
            .into());
        }
        self.create(input).await
    }
}
