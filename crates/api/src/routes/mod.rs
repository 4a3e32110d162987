pub mod auth;
pub mod categories;
pub mod health;
pub mod notes;
pub mod search;
pub mod tasks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                 register (public)
/// /auth/login                  login (public)
///
/// /users/me                    current user
/// /users                       list users (superuser only)
/// /users/{id}                  delete user (self or superuser)
///
/// /tasks                       list, create, bulk delete
/// /tasks/search                filter-engine search
/// /tasks/status                bulk status update (PATCH)
/// /tasks/{id}                  get, update, delete
/// /tasks/{id}/category         unlink category (DELETE)
///
/// /categories                  list, create
/// /categories/{id}             get, update, delete
///
/// /notes                       list, create, bulk delete
/// /notes/task/{task_id}        notes of one task
/// /notes/{id}                  update, delete
///
/// /search                      cross-entity search (tasks + categories)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/tasks", tasks::router())
        .nest("/categories", categories::router())
        .nest("/notes", notes::router())
        .merge(search::router())
}
