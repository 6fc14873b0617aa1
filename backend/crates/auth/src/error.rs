//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. The HTTP status for each variant comes
//! from its [`ErrorKind`] mapping; handlers never pick status codes.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required request fields are absent or empty
    #[error("Missing required fields")]
    MissingFields,

    /// Username already exists
    #[error("Username already exists")]
    DuplicateUsername,

    /// Username failed validation
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    /// Password failed policy validation
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Invalid credentials (unknown user or wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Invalid 2FA code
    #[error("Invalid 2FA code")]
    InvalidTwoFactorCode,

    /// No bearer token on a protected request
    #[error("Token is missing")]
    MissingToken,

    /// Token is malformed, has a bad signature, or is expired
    #[error("Token is invalid")]
    InvalidToken,

    /// Token references a user that no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            // Registration failures are 400s, including duplicates
            AuthError::MissingFields
            | AuthError::DuplicateUsername
            | AuthError::InvalidUsername(_)
            | AuthError::PasswordValidation(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::InvalidTwoFactorCode
            | AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::UserNotFound => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidTwoFactorCode => {
                tracing::warn!("Invalid 2FA code submitted");
            }
            AuthError::InvalidToken | AuthError::MissingToken => {
                tracing::warn!(error = %self, "Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::MissingFields.kind().status_code(), 400);
        assert_eq!(AuthError::DuplicateUsername.kind().status_code(), 400);
        assert_eq!(AuthError::InvalidCredentials.kind().status_code(), 401);
        assert_eq!(AuthError::InvalidTwoFactorCode.kind().status_code(), 401);
        assert_eq!(AuthError::MissingToken.kind().status_code(), 401);
        assert_eq!(AuthError::InvalidToken.kind().status_code(), 401);
        assert_eq!(AuthError::UserNotFound.kind().status_code(), 401);
        assert_eq!(
            AuthError::Internal("boom".to_string()).kind().status_code(),
            500
        );
    }
}
