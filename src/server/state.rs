/**
 * Application State
 *
 * The state container handlers extract from. `FromRef` implementations
 * let a handler ask for just the pool or just the auth service instead of
 * the whole struct.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::AuthService;

/// Shared application state
///
/// Both fields are cheap to clone (`PgPool` and `AuthService` are
/// Arc-backed), so the router clones freely per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth: AuthService,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> PgPool {
        state.pool.clone()
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> AuthService {
        state.auth.clone()
    }
}
