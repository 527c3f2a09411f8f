/**
 * API Error Types
 *
 * The single error enum HTTP handlers return. Auth and database errors
 * convert in with `?`; the remaining variants are constructed explicitly
 * by handlers.
 */

use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::error::AuthError;
use crate::auth::store::is_unique_violation;

/// Errors surfaced by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication or authorization failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database failure outside the credential store
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Entity lookup miss
    #[error("{resource} with id={id} not found")]
    NotFound { resource: &'static str, id: Uuid },

    /// Request payload rejected
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Auth(InvalidCredentials)` and every token/resolution failure - 401
    /// - `Auth(DuplicateKey)` - 409
    /// - `Auth` infrastructure variants - 500
    /// - `Database` unique violation - 409, anything else - 500
    /// - `NotFound` - 404
    /// - `Validation` - 400
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Auth(err) if err.is_unauthorized() => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::DuplicateKey(_)) => StatusCode::CONFLICT,
            Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database(err) if is_unique_violation(err) => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}
