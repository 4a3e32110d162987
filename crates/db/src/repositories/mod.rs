//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. Resource repositories (task, category,
//! note) additionally take an [`Actor`](taskforge_core::policy::Actor) and
//! enforce the ownership policy uniformly: existence is checked first, then
//! owner-or-superuser access; list queries apply the ownership filter at the
//! query level. All failures surface as
//! [`RepoError`](crate::error::RepoError).

pub mod category_repo;
pub mod note_repo;
pub mod task_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
