/**
 * Server Configuration
 *
 * Environment-driven configuration, loaded once at process start and
 * passed around as immutable values. The signing secret is required: a
 * process without one refuses to boot instead of minting forgeable
 * tokens against a built-in default.
 *
 * # Environment variables
 *
 * - `SECRET_KEY` (required) - token signing secret, e.g. `openssl rand -hex 32`
 * - `ALGORITHM` - JWT signing algorithm, default `HS256`
 * - `ACCESS_TOKEN_EXPIRE_MINUTES` - token lifetime, default `30`
 * - `BCRYPT_COST` - password hashing cost factor, default bcrypt's own
 * - `SERVER_HOST` / `SERVER_PORT` - bind address, default `0.0.0.0:8000`
 * - `CORS_ORIGINS` - comma-separated allowed origins
 * - `DATABASE_URL` - Postgres URL; when unset it is composed from
 *   `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT`, `DB_NAME`
 */

use std::str::FromStr;

use chrono::Duration;
use thiserror::Error;

pub use jsonwebtoken::Algorithm;

/// Configuration failures. All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SECRET_KEY must be set to a non-empty value")]
    MissingSecret,

    #[error("unsupported signing algorithm: {0}")]
    InvalidAlgorithm(String),

    #[error("invalid value for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Immutable authentication configuration
///
/// Built once in `main` and shared by reference through `AuthService`.
/// Nothing in the auth core reads the environment after startup.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token signing secret. Non-empty, enforced at construction.
    pub secret: String,
    /// JWT signing algorithm.
    pub algorithm: Algorithm,
    /// Access token lifetime in minutes.
    pub token_ttl_minutes: i64,
    /// bcrypt cost factor for password hashing.
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Build a config, rejecting an empty secret.
    pub fn new(
        secret: impl Into<String>,
        algorithm: Algorithm,
        token_ttl_minutes: i64,
        bcrypt_cost: u32,
    ) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        Ok(Self {
            secret,
            algorithm,
            token_ttl_minutes,
            bcrypt_cost,
        })
    }

    /// Load from the environment. Missing or empty `SECRET_KEY` is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("SECRET_KEY").unwrap_or_default();

        let algorithm = match std::env::var("ALGORITHM") {
            Ok(name) => {
                Algorithm::from_str(&name).map_err(|_| ConfigError::InvalidAlgorithm(name))?
            }
            Err(_) => Algorithm::HS256,
        };

        let token_ttl_minutes = env_number("ACCESS_TOKEN_EXPIRE_MINUTES", 30)?;
        let bcrypt_cost = env_number("BCRYPT_COST", bcrypt::DEFAULT_COST)?;

        Self::new(secret, algorithm, token_ttl_minutes, bcrypt_cost)
    }

    /// The configured token lifetime as a duration.
    pub fn token_ttl(&self) -> Duration {
        Duration::minutes(self.token_ttl_minutes)
    }
}

/// Server bind and collaborator configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env_number("SERVER_PORT", 8000_u16)?;

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
            let password = std::env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string());
            let db_host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let db_port = std::env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
            let name = std::env::var("DB_NAME").unwrap_or_else(|_| "postgres".to_string());
            format!("postgres://{user}:{password}@{db_host}:{db_port}/{name}")
        });

        let cors_origins = std::env::var("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| vec!["http://localhost:8000".to_string()]);

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
        })
    }
}

fn env_number<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        let result = AuthConfig::new("", Algorithm::HS256, 30, 12);
        assert!(matches!(result, Err(ConfigError::MissingSecret)));
    }

    #[test]
    fn test_token_ttl() {
        let config = AuthConfig::new("secret", Algorithm::HS256, 30, 12).unwrap();
        assert_eq!(config.token_ttl(), Duration::minutes(30));
    }

    #[test]
    fn test_parse_origins_trims_and_drops_empties() {
        let origins = parse_origins(" http://localhost:8000 ,, http://localhost:8080");
        assert_eq!(
            origins,
            vec![
                "http://localhost:8000".to_string(),
                "http://localhost:8080".to_string()
            ]
        );
    }
}
