/**
 * Task CRUD Handlers
 *
 * Bearer-protected handlers under /api/v1/tasks. Tasks can be created
 * unowned or bound to a user; the owned-creation route rejects unknown
 * owners instead of leaving dangling references.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::routes::Pagination;
use crate::tasks::{self, Task, TaskChanges, TaskStatus};
use crate::users;

const MIN_NAME_LENGTH: usize = 4;
const MAX_NAME_LENGTH: usize = 100;
const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Task creation request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
}

/// Partial task update. Absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

fn validate(request: &CreateTaskRequest) -> Result<(), ApiError> {
    let name_len = request.name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&name_len) {
        return Err(ApiError::validation(format!(
            "Task name must be {MIN_NAME_LENGTH}-{MAX_NAME_LENGTH} characters"
        )));
    }

    if request.description.chars().count() < MIN_DESCRIPTION_LENGTH {
        return Err(ApiError::validation(format!(
            "Task description must be at least {MIN_DESCRIPTION_LENGTH} characters"
        )));
    }

    Ok(())
}

/// List tasks, paginated
pub async fn list_tasks(
    State(pool): State<PgPool>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = tasks::list_tasks(&pool, page.limit(), page.offset()).await?;
    Ok(Json(tasks))
}

/// Fetch one task by ID
///
/// # Errors
///
/// * `404 Not Found` - no task with this ID
pub async fn get_task(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<Task>, ApiError> {
    let task = tasks::get_task(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task", id))?;

    Ok(Json(task))
}

/// List one user's tasks, paginated
pub async fn list_user_tasks(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = tasks::list_tasks_for_user(&pool, id, page.limit(), page.offset()).await?;
    Ok(Json(tasks))
}

/// Create an unowned task
///
/// # Errors
///
/// * `400 Bad Request` - name or description outside the accepted lengths
pub async fn create_task(
    State(pool): State<PgPool>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    validate(&request)?;

    let task = tasks::create_task(
        &pool,
        &request.name,
        &request.description,
        request.status,
        None,
    )
    .await?;

    Ok(Json(task))
}

/// Create a task owned by the user in the path
///
/// # Errors
///
/// * `400 Bad Request` - name or description outside the accepted lengths
/// * `404 Not Found` - no user with this ID
pub async fn create_task_for_user(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    validate(&request)?;

    if users::get_user_by_id(&pool, id).await?.is_none() {
        return Err(ApiError::not_found("User", id));
    }

    let task = tasks::create_task(
        &pool,
        &request.name,
        &request.description,
        request.status,
        Some(id),
    )
    .await?;

    Ok(Json(task))
}

/// Apply a partial update to a task
///
/// # Errors
///
/// * `404 Not Found` - no task with this ID
pub async fn update_task(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let changes = TaskChanges {
        name: request.name,
        description: request.description,
        status: request.status,
    };

    let task = tasks::update_task(&pool, id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found("Task", id))?;

    Ok(Json(task))
}

/// Delete a task
///
/// # Errors
///
/// * `404 Not Found` - no task with this ID
pub async fn delete_task(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if tasks::delete_task(&pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Task", id))
    }
}
