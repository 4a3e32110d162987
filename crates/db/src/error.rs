//! Repository error taxonomy.
//!
//! Every repository operation returns `Result<_, RepoError>`. The variants
//! map one-to-one onto the HTTP statuses produced by the API layer; messages
//! are stable and user-visible.

/// Convenience alias for repository return values.
pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The target resource, or a referenced foreign entity, does not exist.
    #[error("{0}")]
    NotFound(&'static str),

    /// The actor is neither the resource owner nor a superuser.
    #[error("Not enough permissions")]
    PermissionDenied,

    /// A uniqueness rule was violated (e.g. duplicate category title per owner).
    #[error("{0}")]
    Conflict(String),

    /// The operation does not apply to the resource's current state.
    #[error("{0}")]
    InvalidState(&'static str),

    /// A persistence-layer failure. Always rolls back the active transaction.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
