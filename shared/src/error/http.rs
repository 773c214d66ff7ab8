//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code the backend uses for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::BillNotFound
            | Self::ParcelNotFound
            | Self::BookPoNotFound
            | Self::SaleNotFound
            | Self::ProductNotFound
            | Self::CategoryNotFound
            | Self::CustomerNotFound
            | Self::SellerNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::CategoryNameExists | Self::SellerPhoneExists => {
                StatusCode::CONFLICT
            }

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::SessionExpired => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied | Self::AdminRequired => StatusCode::FORBIDDEN,

            // 503 Service Unavailable
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::ConfigError | Self::StorageError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (validation and stock rules)
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Best-effort code for a response that carried no numeric code
    pub fn from_http_status(status: StatusCode) -> Self {
        match status {
            s if s.is_success() => Self::Success,
            StatusCode::UNAUTHORIZED => Self::NotAuthenticated,
            StatusCode::FORBIDDEN => Self::PermissionDenied,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::AlreadyExists,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationFailed,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Self::TimeoutError,
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => Self::NetworkError,
            _ => Self::InternalError,
        }
    }
}
