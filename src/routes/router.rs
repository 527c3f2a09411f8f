/**
 * Router Configuration
 *
 * Combines the public authentication routes and the bearer-protected API
 * routes into one Axum router.
 *
 * # Route Layout
 *
 * Public:
 * - `POST /api/v1/auth/register` - account creation
 * - `POST /api/v1/auth/token` - login
 *
 * Protected (every route behind `require_auth`):
 * - `GET /api/v1/auth/me`
 * - `GET|POST /api/v1/users`, `GET|PUT|DELETE /api/v1/users/{id}`
 * - `GET|POST /api/v1/tasks`, `GET|PUT|DELETE /api/v1/tasks/{id}`
 * - `GET|POST /api/v1/tasks/users/{id}` - a user's tasks
 *
 * The protection boundary is the router layer, not individual handlers:
 * no protected handler runs without `current_principal` having resolved
 * an active account first.
 */

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

use crate::auth::handlers as auth_handlers;
use crate::middleware::require_auth;
use crate::server::state::AppState;
use crate::tasks::handlers as task_handlers;
use crate::users::handlers as user_handlers;

/// Build the application router
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let public = Router::new()
        .route("/api/v1/auth/register", post(auth_handlers::register))
        .route("/api/v1/auth/token", post(auth_handlers::login));

    let protected = Router::new()
        .route("/api/v1/auth/me", get(auth_handlers::me))
        .route(
            "/api/v1/users",
            get(user_handlers::list_users).post(auth_handlers::register),
        )
        .route(
            "/api/v1/users/{id}",
            get(user_handlers::get_user)
                .put(user_handlers::update_user)
                .delete(user_handlers::delete_user),
        )
        .route(
            "/api/v1/tasks",
            get(task_handlers::list_tasks).post(task_handlers::create_task),
        )
        .route(
            "/api/v1/tasks/{id}",
            get(task_handlers::get_task)
                .put(task_handlers::update_task)
                .delete(task_handlers::delete_task),
        )
        .route(
            "/api/v1/tasks/users/{id}",
            get(task_handlers::list_user_tasks).post(task_handlers::create_task_for_user),
        )
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_auth,
        ));

    public
        .merge(protected)
        .layer(cors_layer(cors_origins))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}

/// CORS for the configured origins.
///
/// Methods and headers are listed explicitly because the layer also
/// allows credentials, which rules out wildcards.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
