//! Unified error system for Etimad Mart
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes shared with the backend
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Bill / parcel / sale errors
//! - 6xxx: Product and stock errors
//! - 7xxx: Customer and seller errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! let err = AppError::insufficient_stock("Kettle", 5, 6);
//! assert_eq!(err.message, "Insufficient stock for Kettle. Available: 5, Requested: 6");
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(6004));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
