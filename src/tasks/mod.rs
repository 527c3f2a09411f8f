/**
 * Task Model and Database Operations
 *
 * Tasks are either unowned or owned by a user; deleting the owner
 * cascades to the tasks. Status lives in the `task_status` Postgres enum
 * and uses kebab-case on the wire (`in-progress`).
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

pub mod handlers;

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "task_status", rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    Created,
    InProgress,
    Finished,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Task struct representing a row in the `tasks` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    /// Owning user, if any
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a task row. `None` fields keep their stored value.
#[derive(Debug, Default, Clone)]
pub struct TaskChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Insert a task, optionally bound to an owner.
pub async fn create_task(
    pool: &PgPool,
    name: &str,
    description: &str,
    status: TaskStatus,
    owner_id: Option<Uuid>,
) -> Result<Task, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (id, name, description, status, owner_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING id, name, description, status, owner_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(status)
    .bind(owner_id)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get a task by ID.
pub async fn get_task(pool: &PgPool, id: Uuid) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, name, description, status, owner_id, created_at, updated_at
        FROM tasks
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List tasks ordered by creation time.
pub async fn list_tasks(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, name, description, status, owner_id, created_at, updated_at
        FROM tasks
        ORDER BY created_at
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// List one user's tasks ordered by creation time.
pub async fn list_tasks_for_user(
    pool: &PgPool,
    owner_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, name, description, status, owner_id, created_at, updated_at
        FROM tasks
        WHERE owner_id = $1
        ORDER BY created_at
        OFFSET $2 LIMIT $3
        "#,
    )
    .bind(owner_id)
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Apply a partial update to a task row. Returns `None` on a missing ID.
pub async fn update_task(
    pool: &PgPool,
    id: Uuid,
    changes: TaskChanges,
) -> Result<Option<Task>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET name = COALESCE($1, name),
            description = COALESCE($2, description),
            status = COALESCE($3, status),
            updated_at = $4
        WHERE id = $5
        RETURNING id, name, description, status, owner_id, created_at, updated_at
        "#,
    )
    .bind(changes.name)
    .bind(changes.description)
    .bind(changes.status)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a task. Returns `false` when no row matched.
pub async fn delete_task(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, r#""in-progress""#);

        let status: TaskStatus = serde_json::from_str(r#""in-progress""#).unwrap();
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result = serde_json::from_str::<TaskStatus>(r#""done""#);
        assert!(result.is_err());
    }
}
