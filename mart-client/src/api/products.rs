//! Product, stock and category endpoints

use super::Resource;
use crate::error::ClientResult;
use crate::http::HttpClient;
use serde::de::IgnoredAny;
use shared::error::AppError;
use shared::models::{
    Category, CategoryInput, Product, ProductCreate, ProductUpdate, PurchaseBatch,
    StockAdd, StockHistoryEntry,
};
use shared::selection::ProductCatalog;

pub struct ProductsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        self.http.get("products").await
    }

    /// Fresh product list indexed for submit-time stock checks
    pub async fn catalog(&self) -> ClientResult<ProductCatalog> {
        let products = self.list().await?;
        tracing::debug!(count = products.len(), "product catalog refreshed");
        Ok(ProductCatalog::new(products))
    }

    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        self.http.get(&format!("products/{}", id)).await
    }

    pub async fn create(&self, input: &ProductCreate) -> ClientResult<Product> {
        if input.name.trim().is_empty() {
            return Err(AppError::required("Product name").into());
        }
        if input.stock < 0 {
            return Err(AppError::validation("Stock cannot be negative").into());
        }
        self.http.post("products", input).await
    }

    pub async fn update(&self, id: &str, input: &ProductUpdate) -> ClientResult<Product> {
        self.http.put(&format!("products/{}", id), input).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&format!("products/{}", id)).await?;
        Ok(())
    }

    /// Receive stock for one product
    pub async fn add_stock(&self, id: &str, input: &StockAdd) -> ClientResult<Product> {
        if input.quantity < 1 {
            return Err(AppError::invalid_quantity().into());
        }
        let product: Product = self
            .http
            .post(&format!("products/{}/add-stock", id), input)
            .await?;
        tracing::info!(product_id = id, added = input.quantity, stock = product.stock, "stock added");
        Ok(product)
    }

    pub async fn stock_history(&self, id: &str) -> ClientResult<Vec<StockHistoryEntry>> {
        self.http
            .get(&format!("products/{}/stock-history", id))
            .await
    }

    /// Products at or below their low-stock threshold
    pub async fn low_stock(&self) -> ClientResult<Vec<Product>> {
        self.http.get("products/low-stock").await
    }

    /// Record a supplier delivery covering several products
    pub async fn add_purchase_batch(&self, batch: &PurchaseBatch) -> ClientResult<Vec<Product>> {
        if batch.supplier_name.trim().is_empty() {
            return Err(AppError::required("Supplier name").into());
        }
        if batch.items.is_empty() {
            return Err(AppError::validation("Add at least one product").into());
        }
        if batch.items.iter().any(|i| i.quantity < 1) {
            return Err(AppError::invalid_quantity().into());
        }
        self.http.post("products/purchase-batch", batch).await
    }

    pub fn categories(&self) -> Resource<'a, Category, CategoryInput> {
        Resource::new(self.http, "categories")
    }
}
