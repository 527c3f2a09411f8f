/**
 * Authentication Service
 *
 * The composition root of the auth core: login (credentials -> token),
 * registration (draft -> stored principal), and request-scoped identity
 * resolution (token -> active principal).
 *
 * `current_principal` is the only way to turn a bearer token into an
 * identity. It always runs all three steps: verify the token, resolve the
 * subject against the credential store, and enforce `is_active`. Handlers
 * cannot skip the activity check because raw token verification is not
 * exported.
 */

use std::sync::Arc;

use crate::auth::error::AuthError;
use crate::auth::password;
use crate::auth::store::{CredentialStore, PrincipalDraft};
use crate::auth::tokens;
use crate::server::config::AuthConfig;
use crate::users::User;

/// Stateless authentication facade shared across request handlers.
///
/// Cloning is cheap; both fields are behind `Arc`. All methods are
/// reentrant and safe to call concurrently.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    config: Arc<AuthConfig>,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, config: AuthConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Hash a plaintext password with the configured cost.
    ///
    /// Every path that sets a password (registration, admin create, user
    /// update) goes through here, so exactly one hashing scheme exists.
    /// bcrypt is CPU-heavy at production cost factors, so the work runs
    /// on the blocking thread pool.
    pub async fn hash_password(&self, plain: &str) -> Result<String, AuthError> {
        let plain = plain.to_string();
        let cost = self.config.bcrypt_cost;

        tokio::task::spawn_blocking(move || password::hash_password(&plain, cost))
            .await
            .map_err(|e| AuthError::Hashing(format!("task join error: {e}")))?
    }

    /// Create a new principal with a hashed password.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` when the email is already registered; `Hashing` or
    /// `Store` on infrastructure failure.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let password_hash = self.hash_password(password).await?;
        let user = self
            .store
            .insert(PrincipalDraft {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!("registered account {}", user.email);
        Ok(user)
    }

    /// Authenticate credentials and mint an access token.
    ///
    /// Lookup miss and password mismatch collapse into the same
    /// `InvalidCredentials` value, so the response cannot reveal whether
    /// the account exists.
    pub async fn login(&self, key: &str, password: &str) -> Result<String, AuthError> {
        let user = match self.store.find_by_key(key).await? {
            Some(user) => user,
            None => {
                tracing::debug!("login rejected: unknown key");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let plain = password.to_string();
        let hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || password::verify_password(&plain, &hash))
            .await
            .map_err(|e| AuthError::Hashing(format!("task join error: {e}")))?;

        if !valid {
            tracing::debug!("login rejected: bad password for {}", user.email);
            return Err(AuthError::InvalidCredentials);
        }

        let token = tokens::issue(&self.config, &user.email, self.config.token_ttl())?;
        tracing::info!("issued token for {}", user.email);
        Ok(token)
    }

    /// Resolve a bearer token into the active principal behind it.
    ///
    /// # Errors
    ///
    /// Token failures (`MalformedToken`, `InvalidSignature`,
    /// `TokenExpired`), `UnknownSubject` when the subject no longer maps
    /// to an account, and `InactiveAccount` when the account is disabled.
    /// The HTTP layer answers all of these identically.
    pub async fn current_principal(&self, token: &str) -> Result<User, AuthError> {
        let subject = tokens::verify(&self.config, token)?;

        let user = self
            .store
            .find_by_key(&subject)
            .await?
            .ok_or(AuthError::UnknownSubject)?;

        if !user.is_active {
            tracing::debug!("rejected token for inactive account {}", user.email);
            return Err(AuthError::InactiveAccount);
        }

        Ok(user)
    }
}
