/**
 * Credential Store
 *
 * Abstraction over principal persistence for the authentication flows.
 * The core consumes exactly two operations: lookup by login key and
 * insert-with-collision-detection. The running server uses the Postgres
 * implementation; tests drive the same flows against an in-memory one.
 */

use async_trait::async_trait;
use sqlx::PgPool;

use crate::auth::error::AuthError;
use crate::users::{self, User};

/// A principal that has not been stored yet.
///
/// `password_hash` is already bcrypt output; plaintext never reaches the
/// store.
#[derive(Debug, Clone)]
pub struct PrincipalDraft {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Persistence operations the authentication core depends on.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a principal by its login key (email). Exact match.
    async fn find_by_key(&self, key: &str) -> Result<Option<User>, AuthError>;

    /// Insert a new principal.
    ///
    /// A key collision fails with `AuthError::DuplicateKey`; it never
    /// overwrites the existing row.
    async fn insert(&self, draft: PrincipalDraft) -> Result<User, AuthError>;
}

/// Postgres-backed credential store used by the running server.
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_key(&self, key: &str) -> Result<Option<User>, AuthError> {
        users::get_user_by_email(&self.pool, key)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))
    }

    async fn insert(&self, draft: PrincipalDraft) -> Result<User, AuthError> {
        match users::create_user(&self.pool, &draft.name, &draft.email, &draft.password_hash).await
        {
            Ok(user) => Ok(user),
            Err(e) if is_unique_violation(&e) => Err(AuthError::DuplicateKey(draft.email)),
            Err(e) => Err(AuthError::Store(e.to_string())),
        }
    }
}

/// Postgres unique_violation, the only error class insert treats as a
/// client fault.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}
