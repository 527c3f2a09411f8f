/**
 * Taskboard Server Entry Point
 *
 * Loads configuration, initializes tracing, and serves the API. A missing
 * signing secret or unreachable database stops the process here, before
 * any request is accepted.
 */

use taskboard::server::config::{AuthConfig, ServerConfig};
use taskboard::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,taskboard=debug".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let server_config = ServerConfig::from_env()?;
    let auth_config = AuthConfig::from_env()?;

    let app = create_app(&server_config, auth_config).await?;

    let addr: std::net::SocketAddr =
        format!("{}:{}", server_config.host, server_config.port).parse()?;
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
