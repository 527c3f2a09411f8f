/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`. Three rules govern what clients see:
 *
 * 1. Every 401 carries `WWW-Authenticate: Bearer`, and all
 *    token/resolution failures share one body, so a caller cannot tell a
 *    bad signature from a disabled account.
 * 2. 5xx responses carry a generic body; the underlying error goes to the
 *    log only.
 * 3. Bodies are JSON of the form `{"detail": "..."}`.
 */

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::auth::error::AuthError;
use crate::auth::store::is_unique_violation;
use crate::error::types::ApiError;

impl ApiError {
    /// Client-visible message for this error.
    fn detail(&self) -> String {
        match self {
            Self::Auth(AuthError::InvalidCredentials) => {
                "Incorrect username or password".to_string()
            }
            Self::Auth(err) if err.is_unauthorized() => {
                "Could not validate credentials".to_string()
            }
            Self::Auth(AuthError::DuplicateKey(email)) => {
                format!("Email: {email} already registered")
            }
            Self::Database(err) if is_unique_violation(err) => {
                "Value already registered".to_string()
            }
            Self::NotFound { .. } | Self::Validation(_) => self.to_string(),
            Self::Auth(_) | Self::Database(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            err if status == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("request failed: {err}");
            }
            Self::Auth(err) if err.is_unauthorized() => {
                tracing::debug!("rejected request: {err}");
            }
            err => {
                tracing::debug!("request error: {err}");
            }
        }

        let body = Json(json!({ "detail": self.detail() }));

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}
