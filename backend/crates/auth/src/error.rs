//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Failed logins are not errors; they are
//! answered with a redirect.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::crypto::SealError;
use platform::password::PasswordHashError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No session secret configured
    #[error("No session secret configured")]
    MissingSecret,

    /// Session payload could not be sealed
    #[error("Session sealing failed: {0}")]
    SessionSealing(#[from] SealError),

    /// Session payload could not be encoded
    #[error("Session encoding failed: {0}")]
    SessionEncoding(#[from] serde_json::Error),

    /// Stored password hash is unusable
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingSecret
            | AuthError::SessionSealing(_)
            | AuthError::SessionEncoding(_)
            | AuthError::PasswordHash(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Internal details stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), "Session could not be processed")
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::SessionSealing(e) => {
                tracing::error!(error = %e, "Session sealing failed");
            }
            AuthError::SessionEncoding(e) => {
                tracing::error!(error = %e, "Session encoding failed");
            }
            _ => {
                tracing::error!(error = %self, "Auth internal error");
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
