/**
 * Registration Handler
 *
 * POST /api/v1/auth/register
 *
 * Creates an account and returns it without the password hash. The same
 * handler also backs the authenticated POST /api/v1/users route; both
 * paths share the validation and the single hashing scheme inside
 * `AuthService::register`.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::service::AuthService;
use crate::error::ApiError;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Register a new account
///
/// # Errors
///
/// * `400 Bad Request` - email without '@', or password shorter than 8 chars
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing or store failure
pub async fn register(
    State(auth): State<AuthService>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if !request.email.contains('@') {
        return Err(ApiError::validation("Invalid email format"));
    }

    if request.password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let user = auth
        .register(&request.name, &request.email, &request.password)
        .await?;

    Ok(Json(UserResponse::from(user)))
}
