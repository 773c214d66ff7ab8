//! Unified error codes for Etimad Mart
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Bill / parcel / sale errors
//! - 6xxx: Product and stock errors
//! - 7xxx: Customer and seller errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as `u16` on the wire so the backend and the client agree on
/// a compact numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,
    /// Password too short
    PasswordTooShort = 1006,
    /// Password reset token is invalid or expired
    ResetTokenInvalid = 1007,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2002,

    // ==================== 4xxx: Bill / Parcel / Sale ====================
    /// Bill not found
    BillNotFound = 4001,
    /// Bill has no line items
    BillEmpty = 4002,
    /// Parcel not found
    ParcelNotFound = 4101,
    /// Parcel status transition not allowed
    ParcelStatusInvalid = 4102,
    /// Book PO record not found
    BookPoNotFound = 4201,
    /// Sale not found
    SaleNotFound = 4301,
    /// Returned quantity exceeds the sold quantity
    ReturnExceedsSale = 4302,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product has invalid price
    ProductInvalidPrice = 6002,
    /// Product is out of stock
    ProductOutOfStock = 6003,
    /// Requested quantity exceeds available stock
    InsufficientStock = 6004,
    /// Quantity is not a positive whole number
    InvalidQuantity = 6005,
    /// Category not found
    CategoryNotFound = 6101,
    /// Category name already exists
    CategoryNameExists = 6102,

    // ==================== 7xxx: Customer / Seller ====================
    /// Customer not found
    CustomerNotFound = 7001,
    /// Seller not found
    SellerNotFound = 7101,
    /// Seller phone already registered
    SellerPhoneExists = 7102,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Operation timed out
    TimeoutError = 9003,
    /// Configuration error
    ConfigError = 9004,
    /// Local storage error
    StorageError = 9005,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Returns true for [`ErrorCode::Success`]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default human readable message
    pub fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",

            // Auth
            ErrorCode::NotAuthenticated => "Not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Token is invalid",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::PasswordTooShort => "Password is too short",
            ErrorCode::ResetTokenInvalid => "Reset link is invalid or has expired",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Admin role required",

            // Bill / Parcel / Sale
            ErrorCode::BillNotFound => "Bill not found",
            ErrorCode::BillEmpty => "Bill has no items",
            ErrorCode::ParcelNotFound => "Parcel not found",
            ErrorCode::ParcelStatusInvalid => "Parcel status change not allowed",
            ErrorCode::BookPoNotFound => "Book PO record not found",
            ErrorCode::SaleNotFound => "Sale not found",
            ErrorCode::ReturnExceedsSale => "Returned quantity exceeds sold quantity",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::ProductOutOfStock => "Product is out of stock",
            ErrorCode::InsufficientStock => "Insufficient stock",
            ErrorCode::InvalidQuantity => "Quantity must be at least 1",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryNameExists => "Category name already exists",

            // Customer / Seller
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::SellerNotFound => "Seller not found",
            ErrorCode::SellerPhoneExists => "Seller phone already registered",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageError => "Local storage error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),
            1006 => Ok(ErrorCode::PasswordTooShort),
            1007 => Ok(ErrorCode::ResetTokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::AdminRequired),

            // Bill / Parcel / Sale
            4001 => Ok(ErrorCode::BillNotFound),
            4002 => Ok(ErrorCode::BillEmpty),
            4101 => Ok(ErrorCode::ParcelNotFound),
            4102 => Ok(ErrorCode::ParcelStatusInvalid),
            4201 => Ok(ErrorCode::BookPoNotFound),
            4301 => Ok(ErrorCode::SaleNotFound),
            4302 => Ok(ErrorCode::ReturnExceedsSale),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6003 => Ok(ErrorCode::ProductOutOfStock),
            6004 => Ok(ErrorCode::InsufficientStock),
            6005 => Ok(ErrorCode::InvalidQuantity),
            6101 => Ok(ErrorCode::CategoryNotFound),
            6102 => Ok(ErrorCode::CategoryNameExists),

            // Customer / Seller
            7001 => Ok(ErrorCode::CustomerNotFound),
            7101 => Ok(ErrorCode::SellerNotFound),
            7102 => Ok(ErrorCode::SellerPhoneExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::TimeoutError),
            9004 => Ok(ErrorCode::ConfigError),
            9005 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::InsufficientStock.code(), 6004);
        assert_eq!(ErrorCode::StorageError.code(), 9005);
    }

    #[test]
    fn test_try_from_u16() {
        assert_eq!(ErrorCode::try_from(6003), Ok(ErrorCode::ProductOutOfStock));
        assert_eq!(ErrorCode::try_from(7001), Ok(ErrorCode::CustomerNotFound));
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::InvalidQuantity).unwrap();
        assert_eq!(json, "6005");

        let code: ErrorCode = serde_json::from_str("4101").unwrap();
        assert_eq!(code, ErrorCode::ParcelNotFound);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_invalid_quantity_message() {
        assert_eq!(
            ErrorCode::InvalidQuantity.message(),
            "Quantity must be at least 1"
        );
    }
}
