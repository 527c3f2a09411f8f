/**
 * Server Initialization
 *
 * Connects to Postgres, runs the embedded migrations, wires the
 * credential store into the auth service, and assembles the router.
 *
 * Unlike a cache or an enrichment sidecar, the database is not an
 * optional service here: a CRUD API that cannot reach its store has
 * nothing to serve, so a failed connection aborts startup instead of
 * booting a half-alive process.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::postgres::PgPoolOptions;

use crate::auth::{AuthService, PgCredentialStore};
use crate::routes::create_router;
use crate::server::config::{AuthConfig, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database is unreachable or a migration cannot be
/// applied. Both are startup-fatal.
pub async fn create_app(
    config: &ServerConfig,
    auth_config: AuthConfig,
) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Running database migrations");
    sqlx::migrate!().run(&pool).await?;

    let store = Arc::new(PgCredentialStore::new(pool.clone()));
    let auth = AuthService::new(store, auth_config);

    let state = AppState { pool, auth };

    Ok(create_router(state, &config.cors_origins))
}
