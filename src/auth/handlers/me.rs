/**
 * Current User Handler
 *
 * GET /api/v1/auth/me
 *
 * Returns the authenticated account. Runs behind `require_auth`, so the
 * token has already been verified and the account resolved and checked
 * for activity by the time this handler executes.
 */

use axum::response::Json;

use crate::auth::handlers::types::UserResponse;
use crate::middleware::CurrentUser;

/// Return the account behind the presented token
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
