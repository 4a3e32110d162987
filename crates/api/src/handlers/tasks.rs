//! Handlers for the `/tasks` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskforge_core::search::{clamp_limit, clamp_skip, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use taskforge_db::models::search::TaskSearchParams;
use taskforge_db::models::task::{CreateTask, Task, TaskStatus, TaskWithCategory, UpdateTask};
use taskforge_db::repositories::TaskRepo;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::query::ListParams;
use crate::response::{MessageResponse, Page};
use crate::state::AppState;

/// Request body for bulk status updates (`PATCH /tasks/status`).
#[derive(Debug, Deserialize)]
pub struct BulkStatusUpdate {
    pub ids: Vec<Uuid>,
    pub status: TaskStatus,
}

/// Request body for bulk deletes (`DELETE /tasks`).
#[derive(Debug, Deserialize)]
pub struct BulkIds {
    pub ids: Vec<Uuid>,
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    input.validate()?;
    let task = TaskRepo::create(&state.pool, &actor, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks
pub async fn list(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<TaskWithCategory>>> {
    let skip = clamp_skip(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

    let (data, count) =
        TaskRepo::list(&state.pool, &actor, skip, limit, params.search.as_deref()).await?;
    Ok(Json(Page { data, count }))
}

/// GET /api/v1/tasks/search
pub async fn search(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Query(params): Query<TaskSearchParams>,
) -> AppResult<Json<Page<TaskWithCategory>>> {
    let data = TaskRepo::search(&state.pool, &actor, &params).await?;
    let count = data.len() as i64;
    Ok(Json(Page { data, count }))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, &actor, id).await?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    input.validate()?;
    let task = TaskRepo::update(&state.pool, &actor, id, &input).await?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    TaskRepo::delete(&state.pool, &actor, id).await?;
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}

/// PATCH /api/v1/tasks/status
pub async fn bulk_update_status(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(input): Json<BulkStatusUpdate>,
) -> AppResult<Json<MessageResponse>> {
    let updated =
        TaskRepo::bulk_update_status(&state.pool, &actor, &input.ids, input.status).await?;
    Ok(Json(MessageResponse::new(format!(
        "{updated} tasks updated successfully"
    ))))
}

/// DELETE /api/v1/tasks
pub async fn bulk_delete(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(input): Json<BulkIds>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = TaskRepo::bulk_delete(&state.pool, &actor, &input.ids).await?;
    Ok(Json(MessageResponse::new(format!(
        "{deleted} tasks deleted successfully"
    ))))
}

/// DELETE /api/v1/tasks/{id}/category
pub async fn remove_category(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    TaskRepo::remove_category(&state.pool, &actor, id).await?;
    Ok(Json(MessageResponse::new(
        "Category removed from task successfully",
    )))
}
