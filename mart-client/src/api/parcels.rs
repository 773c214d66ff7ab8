use super::Resource;
use crate::error::ClientResult;
use shared::error::{AppError, ErrorCode};
use shared::models::{Parcel, ParcelInput, ParcelStatusPatch};

impl Resource<'_, Parcel, ParcelInput> {
    /// Patch delivery and/or payment status
    pub async fn set_status(&self, id: &str, patch: &ParcelStatusPatch) -> ClientResult<Parcel> {
        if patch.status.is_none() && patch.payment_status.is_none() {
            return Err(AppError::with_message(
                ErrorCode::ParcelStatusInvalid,
                "Choose a status to update",
            )
            .into());
        }
        let parcel: Parcel = self
            .http
            .patch(&format!("parcels/{}/status", id), patch)
            .await?;
        tracing::info!(parcel_id = id, status = ?parcel.status, payment = ?parcel.payment_status, "parcel status changed");
        Ok(parcel)
    }
}
