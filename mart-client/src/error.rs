//! Client error types

use crate::session::SessionError;
use http::StatusCode;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Shown when a failure carries no message worth surfacing
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (missing, expired or rejected token)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend rejected the payload
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success response with a readable message
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Rejected locally before any request was sent
    #[error(transparent)]
    App(#[from] AppError),

    /// Local session persistence failed
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Bad configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Text for the error notice: the server's or validator's message when
    /// there is one, the generic fallback otherwise
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. }
            | ClientError::Forbidden(message)
            | ClientError::NotFound(message)
            | ClientError::Validation(message)
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            ClientError::App(err) => err.message.clone(),
            ClientError::Unauthorized => "Your session has expired. Please log in again.".into(),
            _ => GENERIC_FAILURE.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }

    /// Closest unified error code, for logs
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::App(err) => err.code,
            ClientError::Unauthorized => ErrorCode::NotAuthenticated,
            ClientError::Forbidden(_) => ErrorCode::PermissionDenied,
            ClientError::NotFound(_) => ErrorCode::NotFound,
            ClientError::Validation(_) => ErrorCode::ValidationFailed,
            ClientError::Api { status, .. } => StatusCode::from_u16(*status)
                .map(ErrorCode::from_http_status)
                .unwrap_or(ErrorCode::Unknown),
            ClientError::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            ClientError::Http(_) => ErrorCode::NetworkError,
            ClientError::Session(_) => ErrorCode::StorageError,
            ClientError::Config(_) => ErrorCode::ConfigError,
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                ErrorCode::InvalidFormat
            }
            ClientError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ClientError::Validation("Phone is required".into());
        assert_eq!(err.user_message(), "Phone is required");

        let err = ClientError::Api {
            status: 500,
            message: "   ".into(),
            details: None,
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE);

        let err = ClientError::Internal("socket closed".into());
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_code_mapping() {
        let err = ClientError::Api {
            status: 409,
            message: "Phone already registered".into(),
            details: None,
        };
        assert_eq!(err.code(), ErrorCode::AlreadyExists);
        assert_eq!(ClientError::Unauthorized.code(), ErrorCode::NotAuthenticated);

        let err: ClientError = AppError::invalid_quantity().into();
        assert_eq!(err.code(), ErrorCode::InvalidQuantity);
    }

    #[test]
    fn test_user_message_for_local_validation() {
        let err: ClientError = AppError::insufficient_stock("Iron", 1, 2).into();
        assert_eq!(
            err.user_message(),
            "Insufficient stock for Iron. Available: 1, Requested: 2"
        );
    }
}
