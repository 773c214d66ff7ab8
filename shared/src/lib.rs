//! Shared types for Etimad Mart
//!
//! Domain models, error codes, the stock-aware product selection, bilingual
//! search normalization and auth DTOs used by the client crate.

pub mod client;
pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod search;
pub mod selection;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
pub use selection::{LineItem, LineSelection, ProductCatalog, StockWarning};
