/**
 * User CRUD Handlers
 *
 * Bearer-protected handlers under /api/v1/users. Creation is routed to
 * the shared registration handler, so every path that stores a password
 * uses the one hashing scheme.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::handlers::types::UserResponse;
use crate::error::ApiError;
use crate::routes::Pagination;
use crate::server::state::AppState;
use crate::users::{self, UserChanges};

/// Partial user update. Absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Plaintext; re-hashed with bcrypt before it reaches the store
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

/// List users, paginated
pub async fn list_users(
    State(pool): State<PgPool>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = users::list_users(&pool, page.limit(), page.offset()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user by ID
///
/// # Errors
///
/// * `404 Not Found` - no user with this ID
pub async fn get_user(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = users::get_user_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User", id))?;

    Ok(Json(UserResponse::from(user)))
}

/// Apply a partial update to a user
///
/// A password change goes through the same bcrypt hashing as
/// registration. An email change can collide with another account, which
/// surfaces as a conflict.
///
/// # Errors
///
/// * `404 Not Found` - no user with this ID
/// * `409 Conflict` - new email already registered
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let password_hash = match request.password.as_deref() {
        Some(plain) => Some(state.auth.hash_password(plain).await?),
        None => None,
    };

    let changes = UserChanges {
        name: request.name,
        email: request.email,
        password_hash,
        is_active: request.is_active,
    };

    let user = users::update_user(&state.pool, id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found("User", id))?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user and, via the schema, their owned tasks
///
/// # Errors
///
/// * `404 Not Found` - no user with this ID
pub async fn delete_user(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if users::delete_user(&pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("User", id))
    }
}
