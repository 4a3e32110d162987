//! Handlers for the `/users` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use taskforge_core::error::CoreError;
use taskforge_core::search::{clamp_limit, clamp_skip, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use taskforge_db::models::user::UserPublic;
use taskforge_db::repositories::UserRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::{AuthUser, RequireSuperuser};
use crate::query::ListParams;
use crate::response::{MessageResponse, Page};
use crate::state::AppState;

/// GET /api/v1/users/me
pub async fn me(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
) -> AppResult<Json<UserPublic>> {
    let user = UserRepo::find_by_id(&state.pool, actor.id).await?;
    Ok(Json(user.into()))
}

/// GET /api/v1/users (superuser only)
pub async fn list(
    State(state): State<AppState>,
    RequireSuperuser(_): RequireSuperuser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<UserPublic>>> {
    let skip = clamp_skip(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

    let (users, count) = UserRepo::list(&state.pool, skip, limit).await?;
    let data = users.into_iter().map(UserPublic::from).collect();
    Ok(Json(Page { data, count }))
}

/// DELETE /api/v1/users/{id}
///
/// Users may delete their own account; superusers may delete anyone.
/// Cascades to all owned tasks, categories, and notes.
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    if !actor.can_access(id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not enough permissions".into(),
        )));
    }
    UserRepo::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
