//! Route definitions for the `/users` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /me   -> me
/// GET    /     -> list (superuser only)
/// DELETE /{id} -> delete (self or superuser)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(users::me))
        .route("/", get(users::list))
        .route("/{id}", delete(users::delete))
}
