/**
 * User Model and Database Operations
 *
 * The user row doubles as the authentication principal: its email is the
 * login key and the token subject, and `is_active` gates identity
 * resolution. The `password_hash` column only ever holds bcrypt output
 * and is never serialized into a response.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

pub mod handlers;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID), immutable after creation
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address, unique, used as login key and token subject
    pub email: String,
    /// bcrypt password hash, never exposed over the wire
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Disabled accounts fail identity resolution even with a valid token
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a user row. `None` fields keep their stored value.
#[derive(Debug, Default, Clone)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub is_active: Option<bool>,
}

/// Insert a new user row.
///
/// The unique constraint on `email` makes a duplicate insert fail with a
/// database error rather than silently overwriting; callers translate
/// that into a conflict.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, is_active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, TRUE, $5, $5)
        RETURNING id, name, email, password_hash, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get a user by email, the login key. Exact match, no normalization.
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, is_active, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get a user by ID.
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, is_active, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List users ordered by creation time, newest last.
pub async fn list_users(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, is_active, created_at, updated_at
        FROM users
        ORDER BY created_at
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Apply a partial update to a user row.
///
/// Returns `None` when no row matches `id`. A `password_hash` change must
/// already be bcrypt output; handlers hash before calling in.
pub async fn update_user(
    pool: &PgPool,
    id: Uuid,
    changes: UserChanges,
) -> Result<Option<User>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = COALESCE($1, name),
            email = COALESCE($2, email),
            password_hash = COALESCE($3, password_hash),
            is_active = COALESCE($4, is_active),
            updated_at = $5
        WHERE id = $6
        RETURNING id, name, email, password_hash, is_active, created_at, updated_at
        "#,
    )
    .bind(changes.name)
    .bind(changes.email)
    .bind(changes.password_hash)
    .bind(changes.is_active)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a user. Owned tasks go with it (ON DELETE CASCADE).
///
/// Returns `false` when no row matched.
pub async fn delete_user(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
