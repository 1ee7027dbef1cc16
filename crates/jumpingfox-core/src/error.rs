//! Shared error type across JumpingFox crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Requested resource does not exist.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type used by core and gateway.
///
/// `BadRequest` and `NotFound` display their payload verbatim because the
/// payload is the client-facing message (e.g. "Fox with ID 5 not found").
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ApiError::BadRequest(_) => ClientCode::BadRequest,
            ApiError::NotFound(_) => ClientCode::NotFound,
            ApiError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            ApiError::Internal(_) => ClientCode::Internal,
        }
    }
}
