//! Handlers for the `/categories` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use taskforge_core::search::{clamp_limit, clamp_skip, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use taskforge_db::models::category::{Category, CreateCategory, UpdateCategory};
use taskforge_db::repositories::CategoryRepo;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::query::ListParams;
use crate::response::{MessageResponse, Page};
use crate::state::AppState;

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    input.validate()?;
    let category = CategoryRepo::create(&state.pool, &actor, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/categories
pub async fn list(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Category>>> {
    let skip = clamp_skip(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

    let (data, count) =
        CategoryRepo::list(&state.pool, &actor, skip, limit, params.search.as_deref()).await?;
    Ok(Json(Page { data, count }))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, &actor, id).await?;
    Ok(Json(category))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    input.validate()?;
    let category = CategoryRepo::update(&state.pool, &actor, id, &input).await?;
    Ok(Json(category))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    CategoryRepo::delete(&state.pool, &actor, id).await?;
    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
