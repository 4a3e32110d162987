//! Handler for the cross-entity `/search` endpoint.
//!
//! Searches tasks and/or categories by a single term matched against title
//! or description, ownership-scoped like every list operation.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use taskforge_core::search::MAX_LIST_LIMIT;
use taskforge_db::models::category::Category;
use taskforge_db::models::task::TaskWithCategory;
use taskforge_db::repositories::{CategoryRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::Page;
use crate::state::AppState;

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search term for title or description. Absent means "match all".
    pub q: Option<String>,
    /// Restrict to one entity type: `task` or `category`. Absent means both.
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
}

/// Response for `GET /search`: one page when the search is restricted to a
/// single entity type, both pages otherwise.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Tasks(Page<TaskWithCategory>),
    Categories(Page<Category>),
    Combined {
        tasks: Page<TaskWithCategory>,
        categories: Page<Category>,
    },
}

/// GET /api/v1/search
pub async fn search(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let term = params.q.as_deref();

    let response = match params.entity_type.as_deref() {
        Some("task") => SearchResponse::Tasks(search_tasks(&state, &actor, term).await?),
        Some("category") => {
            SearchResponse::Categories(search_categories(&state, &actor, term).await?)
        }
        None => SearchResponse::Combined {
            tasks: search_tasks(&state, &actor, term).await?,
            categories: search_categories(&state, &actor, term).await?,
        },
        Some(other) => {
            return Err(AppError::BadRequest(format!(
                "Unknown search type '{other}'. Expected 'task' or 'category'"
            )))
        }
    };

    Ok(Json(response))
}

async fn search_tasks(
    state: &AppState,
    actor: &taskforge_core::policy::Actor,
    term: Option<&str>,
) -> AppResult<Page<TaskWithCategory>> {
    let (data, count) = TaskRepo::list(&state.pool, actor, 0, MAX_LIST_LIMIT, term).await?;
    Ok(Page { data, count })
}

async fn search_categories(
    state: &AppState,
    actor: &taskforge_core::policy::Actor,
    term: Option<&str>,
) -> AppResult<Page<Category>> {
    let (data, count) = CategoryRepo::list(&state.pool, actor, 0, MAX_LIST_LIMIT, term).await?;
    Ok(Page { data, count })
}
