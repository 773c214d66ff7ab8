//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 4xxx: Bill / parcel / sale errors
/// - 6xxx: Product and stock errors
/// - 7xxx: Customer and seller errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Bill, parcel and sale errors (4xxx)
    Order,
    /// Product and stock errors (6xxx)
    Product,
    /// Customer and seller errors (7xxx)
    People,
    /// System errors (9xxx and unassigned ranges)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            4000..5000 => Self::Order,
            6000..7000 => Self::Product,
            7000..8000 => Self::People,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Order => "order",
            Self::Product => "product",
            Self::People => "people",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(4101), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from_code(6004), ErrorCategory::Product);
        assert_eq!(ErrorCategory::from_code(7101), ErrorCategory::People);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::TokenExpired.category(), ErrorCategory::Auth);
        assert_eq!(ErrorCode::AdminRequired.category(), ErrorCategory::Permission);
        assert_eq!(ErrorCode::ParcelNotFound.category(), ErrorCategory::Order);
        assert_eq!(ErrorCode::InsufficientStock.category(), ErrorCategory::Product);
        assert_eq!(ErrorCode::SellerNotFound.category(), ErrorCategory::People);
        assert_eq!(ErrorCode::StorageError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::People).unwrap();
        assert_eq!(json, "\"people\"");

        let category: ErrorCategory = serde_json::from_str("\"product\"").unwrap();
        assert_eq!(category, ErrorCategory::Product);
    }
}
