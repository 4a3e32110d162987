//! Route definition for the cross-entity `/search` endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET /search -> search (tasks + categories)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search::search))
}
