//! Live product lookup used by the selector and submit-time validation

use crate::models::Product;
use std::collections::HashMap;

/// Products indexed by id, built from the latest product list fetch
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.get(product_id)
    }

    /// Currently known stock, `None` for unknown products
    pub fn stock(&self, product_id: &str) -> Option<i64> {
        self.get(product_id).map(|p| p.stock)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter)
    }
}
