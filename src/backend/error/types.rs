/**
 * Backend Error Types
 *
 * This module defines the single error type returned by request handlers.
 * Every variant maps to an HTTP status; the response body is a generic error
 * page (see `conversion`).
 *
 * # Error Categories
 *
 * - Validation: a required form field was missing or too long (400)
 * - Authentication: unknown user or wrong password (401)
 * - Storage: duplicate username (409) or datastore failure (500)
 * - Hashing: bcrypt or blocking-pool failure (500)
 * - Configuration: invalid settings at startup (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::authenticator::AuthFailure;
use crate::backend::auth::password::HashError;
use crate::backend::store::StoreError;
use crate::shared::{ConfigError, SharedError};

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Rejected input (from the shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Login rejected
    #[error(transparent)]
    Auth(#[from] AuthFailure),

    /// Datastore failure or constraint violation
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] HashError),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BackendError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Storage(StoreError::UsernameTaken(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the user
    ///
    /// Server-side failures collapse to a generic message; the detail is only
    /// logged.
    pub fn message(&self) -> String {
        match self {
            Self::SharedError(err) => match err {
                SharedError::ValidationError { message, .. } => message.clone(),
            },
            Self::Auth(_) => "Invalid username or password".to_string(),
            Self::Storage(StoreError::UsernameTaken(_)) => "Username already taken".to_string(),
            Self::Storage(_) | Self::Hashing(_) | Self::Config(_) => {
                "Something went wrong".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let validation: BackendError = SharedError::validation("title", "title is required").into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let auth: BackendError = AuthFailure::BadPassword.into();
        assert_eq!(auth.status_code(), StatusCode::UNAUTHORIZED);

        let taken: BackendError = StoreError::UsernameTaken("alice".to_string()).into();
        assert_eq!(taken.status_code(), StatusCode::CONFLICT);

        let storage: BackendError = StoreError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let config: BackendError = ConfigError::MissingValue("bind_address").into();
        assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(config.message(), "Something went wrong");
    }

    #[test]
    fn test_auth_failures_share_one_message() {
        let unknown: BackendError = AuthFailure::UnknownUser.into();
        let bad: BackendError = AuthFailure::BadPassword.into();
        assert_eq!(unknown.message(), bad.message());
    }

    #[test]
    fn test_storage_message_is_generic() {
        let storage: BackendError = StoreError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(storage.message(), "Something went wrong");
        assert!(storage.to_string().contains("database error"));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let error: BackendError = SharedError::validation("title", "title is required").into();
        assert_eq!(error.message(), "title is required");
    }
}
