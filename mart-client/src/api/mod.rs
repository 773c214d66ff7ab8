//! Resource facades over [`HttpClient`]
//!
//! Plain CRUD collections share [`Resource`]; resource-specific endpoints are
//! added as inherent impls in the per-resource modules.

mod auth;
mod bills;
mod book_po;
mod customers;
mod dashboard;
mod finance;
mod lcs;
mod marketing;
mod parcels;
mod products;
mod sales;
mod sellers;

pub use auth::AuthApi;
pub use dashboard::DashboardApi;
pub use lcs::LcsApi;
pub use marketing::MarketingApi;
pub use products::ProductsApi;

use crate::error::ClientResult;
use crate::http::HttpClient;
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::marker::PhantomData;

/// CRUD collection at `path`, reading `T` and writing `I`
#[derive(Debug)]
pub struct Resource<'a, T, I> {
    http: &'a HttpClient,
    path: &'static str,
    _marker: PhantomData<fn() -> (T, I)>,
}

impl<'a, T, I> Resource<'a, T, I>
where
    T: DeserializeOwned,
    I: Serialize + Sync,
{
    pub(crate) fn new(http: &'a HttpClient, path: &'static str) -> Self {
        Self {
            http,
            path,
            _marker: PhantomData,
        }
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }

    pub async fn list(&self) -> ClientResult<Vec<T>> {
        self.http.get(self.path).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<T> {
        self.http.get(&self.item_path(id)).await
    }

    pub async fn create(&self, input: &I) -> ClientResult<T> {
        let created: T = self.http.post(self.path, input).await?;
        tracing::debug!(resource = self.path, "created");
        Ok(created)
    }

    pub async fn update(&self, id: &str, input: &I) -> ClientResult<T> {
        let updated: T = self.http.put(&self.item_path(id), input).await?;
        tracing::debug!(resource = self.path, id, "updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&self.item_path(id)).await?;
        tracing::debug!(resource = self.path, id, "deleted");
        Ok(())
    }
}
