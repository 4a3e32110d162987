//! Route definitions for the `/tasks` resource.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// DELETE /               -> bulk_delete
/// GET    /search         -> search (filter engine)
/// PATCH  /status         -> bulk_update_status
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// DELETE /{id}/category  -> remove_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(tasks::list).post(tasks::create).delete(tasks::bulk_delete),
        )
        .route("/search", get(tasks::search))
        .route("/status", patch(tasks::bulk_update_status))
        .route(
            "/{id}",
            get(tasks::get_by_id)
                .put(tasks::update)
                .delete(tasks::delete),
        )
        .route("/{id}/category", delete(tasks::remove_category))
}
