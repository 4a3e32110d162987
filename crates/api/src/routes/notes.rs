//! Route definitions for the `/notes` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Routes mounted at `/notes`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// DELETE /                -> bulk_delete
/// GET    /task/{task_id}  -> list_by_task
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(notes::list).post(notes::create).delete(notes::bulk_delete),
        )
        .route("/task/{task_id}", get(notes::list_by_task))
        .route("/{id}", put(notes::update).delete(notes::delete))
}
