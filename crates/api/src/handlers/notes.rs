//! Handlers for the `/notes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use taskforge_core::search::{clamp_limit, clamp_skip, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use taskforge_db::models::note::{CreateNote, Note, UpdateNote};
use taskforge_db::repositories::NoteRepo;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::tasks::BulkIds;
use crate::middleware::AuthUser;
use crate::query::ListParams;
use crate::response::{MessageResponse, Page};
use crate::state::AppState;

/// POST /api/v1/notes
pub async fn create(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(input): Json<CreateNote>,
) -> AppResult<(StatusCode, Json<Note>)> {
    input.validate()?;
    let note = NoteRepo::create(&state.pool, &actor, &input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/v1/notes
pub async fn list(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Note>>> {
    let skip = clamp_skip(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

    let (data, count) =
        NoteRepo::list(&state.pool, &actor, skip, limit, params.search.as_deref()).await?;
    Ok(Json(Page { data, count }))
}

/// GET /api/v1/notes/task/{task_id}
pub async fn list_by_task(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(task_id): Path<Uuid>,
) -> AppResult<Json<Page<Note>>> {
    let data = NoteRepo::list_by_task(&state.pool, &actor, task_id).await?;
    let count = data.len() as i64;
    Ok(Json(Page { data, count }))
}

/// PUT /api/v1/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateNote>,
) -> AppResult<Json<Note>> {
    input.validate()?;
    let note = NoteRepo::update(&state.pool, &actor, id, &input).await?;
    Ok(Json(note))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    NoteRepo::delete(&state.pool, &actor, id).await?;
    Ok(Json(MessageResponse::new("Note deleted successfully")))
}

/// DELETE /api/v1/notes
pub async fn bulk_delete(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(input): Json<BulkIds>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = NoteRepo::bulk_delete(&state.pool, &actor, &input.ids).await?;
    Ok(Json(MessageResponse::new(format!(
        "{deleted} notes deleted successfully"
    ))))
}
