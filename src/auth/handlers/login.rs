/**
 * Login Handler
 *
 * POST /api/v1/auth/token
 *
 * Verifies credentials and answers with a bearer token. Unknown email and
 * wrong password produce byte-identical 401 responses.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::service::AuthService;
use crate::error::ApiError;

/// Authenticate and mint an access token
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password, one shared body
/// * `500 Internal Server Error` - store or signing failure
pub async fn login(
    State(auth): State<AuthService>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = auth.login(&request.email, &request.password).await?;
    Ok(Json(TokenResponse::bearer(token)))
}
